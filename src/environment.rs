//! Module for representing environments.

use std::collections::HashMap;

use log::trace;

use crate::builtins;
use crate::function::{Func, Function};


/// Mapping from symbol name to Function.
///
/// Populated before evaluation starts; the evaluator only reads it.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    map: HashMap<String, Function>,
}

impl Environment {
    pub fn new() -> Environment {
        Environment::default()
    }

    /// Environment holding every builtin.
    pub fn with_builtins() -> Environment {
        let mut env = Environment::new();
        for (name, fun) in builtins::BUILTINS.iter() {
            env.insert(*name, *fun);
        }
        env
    }

    /// Binds name to fun; rebinding replaces the previous Function.
    pub fn insert<S: AsRef<str>, F: Func + 'static>(&mut self, name: S, fun: F) {
        let name = name.as_ref();
        self.map.insert(name.to_string(), Function::new(name, fun));
    }

    pub fn lookup(&self, name: &str) -> Option<&Function> {
        trace!("Env lookup: {}", name);
        self.map.get(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}


#[cfg(test)]
#[path = "./environment_test.rs"]
mod environment_test;
