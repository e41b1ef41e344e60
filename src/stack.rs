use crate::error::{Error, Result};

/// Default capacity: room for 512 nested paren constructs, two values each.
pub const DEFAULT_STACK_CAPACITY: usize = 1024;

/// Fixed-capacity stack of saved coordinates.
///
/// Popping an empty stack returns 0, which is part of the language: a stray
/// `)` jumps to the origin rather than failing. Pushing onto a full stack is
/// the one fatal runtime condition.
#[derive(Debug, Clone)]
pub struct ValueStack {
    data: Vec<i32>,
    capacity: usize,
}

impl ValueStack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline(always)]
    pub fn push(&mut self, val: i32) -> Result<()> {
        if self.data.len() == self.capacity {
            return Err(Error::StackOverflow {
                capacity: self.capacity,
            });
        }
        self.data.push(val);
        Ok(())
    }

    #[inline(always)]
    pub fn pop(&mut self) -> i32 {
        self.data.pop().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl Default for ValueStack {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_STACK_CAPACITY)
    }
}
