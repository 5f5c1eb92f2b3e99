//! Cons cells; the only compound structure a Value can hold.
//!
//! A list is a chain of cells linked through cdr. Chains built by the reader
//! (and by FromIterator) end in the canonical empty cell: no car and no cdr.
//! Cells without a car hold no element, so iteration, equality and printing
//! skip them.

use std::convert::TryFrom;
use std::iter::FromIterator;

use super::value::{HeapValue, Value};


/// Empty cell handed out when a chain ends without its empty terminator.
static EMPTY: Cons = Cons {
    car: None,
    cdr: None,
};

#[derive(Default)]
pub struct Cons {
    car: Option<HeapValue>,
    cdr: Option<Box<Cons>>,
}

pub struct ConsIter<'a> {
    current: Option<&'a Cons>,
}

impl Cons {
    pub fn new(car: Option<HeapValue>, cdr: Option<Box<Cons>>) -> Cons {
        Cons { car, cdr }
    }

    /// Prepends val onto tail.
    pub fn cons<T: Into<Value>>(val: T, tail: Cons) -> Cons {
        Cons {
            car: Some(Box::new(val.into())),
            cdr: Some(Box::new(tail)),
        }
    }

    pub fn car(&self) -> Option<&Value> {
        self.car.as_deref()
    }

    pub fn cdr(&self) -> Option<&Cons> {
        self.cdr.as_deref()
    }

    /// Everything after the head, as a list in its own right.
    pub fn rest(&self) -> &Cons {
        match &self.cdr {
            Some(next) => next,
            None => &EMPTY,
        }
    }

    /// True when the chain holds no elements, however many cells it has.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// First element and the cells following it; None when empty.
    pub fn split_first(&self) -> Option<(&Value, &Cons)> {
        let mut cell = self;
        loop {
            if let Some(val) = cell.car() {
                return Some((val, cell.rest()));
            }
            cell = cell.cdr()?;
        }
    }

    pub fn iter(&self) -> ConsIter {
        ConsIter {
            current: Some(self),
        }
    }

    pub fn consume(mut self) -> (Option<HeapValue>, Option<Box<Cons>>) {
        (self.car.take(), self.cdr.take())
    }
}


impl<'a> Iterator for ConsIter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(cell) = self.current {
            self.current = cell.cdr();
            if let Some(val) = cell.car() {
                return Some(val);
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a Cons {
    type Item = &'a Value;
    type IntoIter = ConsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Into<Value>> FromIterator<T> for Cons {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements = iter.into_iter().collect::<Vec<_>>();
        elements
            .into_iter()
            .rev()
            .fold(Cons::default(), |tail, val| Cons::cons(val, tail))
    }
}

impl Clone for Cons {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl PartialEq for Cons {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl std::fmt::Debug for Cons {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for Cons {
    // Unlink the chain one cell at a time so long lists don't recurse.
    fn drop(&mut self) {
        let mut next = self.cdr.take();
        while let Some(mut cell) = next {
            next = cell.cdr.take();
        }
    }
}


// TryFrom<Value-like> impls.
impl TryFrom<Value> for Cons {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::List(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a Cons {
    type Error = &'a Value;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        if let Value::List(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}
