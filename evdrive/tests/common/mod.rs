//! Stack node shared by the integration tests and the `stack_node` example.

#![allow(dead_code)]

use evdrive::{Dispatcher, Event, Payload, handlers::LoggingHandler};
use std::{cell::RefCell, rc::Rc};

// ============================================================================
// Stack backend
// ============================================================================

pub const STACK_MAX: usize = 10;

/// Environment variable overriding the stack capacity.
pub const STACK_MAX_VAR: &str = "EVDRIVE_STACK_MAX";

pub const INIT: u8 = 0;
pub const GET_MAX: u8 = 1;
pub const PEEK: u8 = 2;
pub const POP: u8 = 3;
pub const PUSH: u8 = 4;

/// Fixed-capacity integer stack used as an application backend.
///
/// `peek` and `pop` on an empty stack return 0, which cannot be told apart
/// from a stored 0; `try_peek` / `try_pop` do not have that problem. A push
/// onto a full stack overwrites the top value.
#[derive(Debug)]
pub struct Stack {
    data: Vec<i32>,
    max: usize,
}

impl Stack {
    pub fn new(max: usize) -> Self {
        Self {
            data: Vec::with_capacity(max),
            max,
        }
    }

    pub fn init(&mut self) {
        self.data.clear();
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Capacity as reported by the get-max instruction.
    pub fn reported_max(&self) -> i32 {
        to_result(self.max)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn try_peek(&self) -> Option<i32> {
        self.data.last().copied()
    }

    pub fn try_pop(&mut self) -> Option<i32> {
        self.data.pop()
    }

    pub fn peek(&self) -> i32 {
        self.try_peek().unwrap_or(0)
    }

    pub fn pop(&mut self) -> i32 {
        self.try_pop().unwrap_or(0)
    }

    pub fn push(&mut self, value: i32) {
        if self.data.len() == self.max {
            self.data.pop();
        }
        self.data.push(value);
    }
}

/// Clamp a count into a handler result.
pub fn to_result(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Read a capacity override. Missing, unparsable or zero values fall back to
/// [`STACK_MAX`].
pub fn parse_stack_max(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(STACK_MAX)
}

/// Capacity taken from [`STACK_MAX_VAR`].
pub fn stack_max_from_env() -> usize {
    parse_stack_max(std::env::var(STACK_MAX_VAR).ok().as_deref())
}

pub type SharedStack = Rc<RefCell<Stack>>;

/// Register the five stack operations on codes 0-4, each wrapped in a
/// [`LoggingHandler`] named after the operation.
pub fn register_stack(dispatcher: &mut Dispatcher, stack: &SharedStack) {
    let s = stack.clone();
    dispatcher.register(
        INIT,
        LoggingHandler::new(move |_: Payload| s.borrow_mut().init(), "init"),
    );
    let s = stack.clone();
    dispatcher.register(
        GET_MAX,
        LoggingHandler::new(move |_: Payload| s.borrow().reported_max(), "get_max"),
    );
    let s = stack.clone();
    dispatcher.register(
        PEEK,
        LoggingHandler::new(move |_: Payload| s.borrow().peek(), "peek"),
    );
    let s = stack.clone();
    dispatcher.register(
        POP,
        LoggingHandler::new(move |_: Payload| s.borrow_mut().pop(), "pop"),
    );
    let s = stack.clone();
    dispatcher.register(
        PUSH,
        LoggingHandler::new(move |p: Payload| s.borrow_mut().push(p.as_i32()), "push"),
    );
}

/// A dispatcher wired to a fresh stack of capacity `max`.
pub fn stack_node_with(max: usize) -> (Dispatcher, SharedStack) {
    let stack = Rc::new(RefCell::new(Stack::new(max)));
    let mut dispatcher = Dispatcher::new();
    register_stack(&mut dispatcher, &stack);
    (dispatcher, stack)
}

pub fn stack_node() -> (Dispatcher, SharedStack) {
    stack_node_with(STACK_MAX)
}

// ============================================================================
// Event streams
// ============================================================================

/// The demo stream: init, get max, push 125, push 65281, pop, peek, pop,
/// pop on empty, then the unregistered instruction 16.
pub const DEMO_STREAM: [u8; 45] = [
    0x00, 0x00, 0x00, 0x00, 0x00, // init
    0x01, 0x00, 0x00, 0x00, 0x00, // get max
    0x04, 0x7d, 0x00, 0x00, 0x00, // push 125
    0x04, 0x01, 0xff, 0x00, 0x00, // push 65281
    0x03, 0x00, 0x00, 0x00, 0x00, // pop -> 65281
    0x02, 0x00, 0x00, 0x00, 0x00, // peek -> 125
    0x03, 0x00, 0x00, 0x00, 0x00, // pop -> 125
    0x03, 0x00, 0x00, 0x00, 0x00, // pop on empty -> 0
    0x10, 0x00, 0x00, 0x00, 0x00, // no handler
];

pub fn op(instruction: u8) -> Event {
    Event::with_int(instruction, 0)
}

pub fn push(value: i32) -> Event {
    Event::with_int(PUSH, value)
}
