//! End-to-end: encoded events driving a stack backend through the dispatcher.

use evdrive::{
    DispatchError, RunError, decode, encode_all,
    runner::{OnUnregistered, Runner, Step},
    source::{ByteSource, SliceSource},
};

mod common;
use common::{
    DEMO_STREAM, GET_MAX, INIT, PEEK, POP, STACK_MAX, Stack, op, parse_stack_max, push,
    stack_node, stack_node_with, to_result,
};

#[test]
fn test_demo_sequence_results() {
    let (dispatcher, _stack) = stack_node();
    let bytes = encode_all(&[
        op(INIT),
        push(125),
        push(65281),
        op(POP),
        op(PEEK),
        op(POP),
        op(POP),
    ]);

    let mut source = SliceSource::new(&bytes);
    let mut results = Vec::new();
    while let Some(frame) = source.next_frame().unwrap() {
        results.push(dispatcher.dispatch(decode(&frame)).unwrap());
    }

    // init and push report 0; the final pop hits an empty stack.
    assert_eq!(results, vec![0, 0, 0, 65281, 125, 125, 0]);
}

#[test]
fn test_demo_stream_stops_at_instruction_16() {
    let (dispatcher, stack) = stack_node();
    let mut runner = Runner::new(&dispatcher, SliceSource::new(&DEMO_STREAM));

    let mut results = Vec::new();
    let err = loop {
        match runner.step() {
            Ok(Some(Step::Dispatched { result, .. })) => results.push(result),
            Ok(Some(Step::Skipped { .. })) => unreachable!("stop policy never skips"),
            Ok(None) => panic!("stream should end in an error"),
            Err(e) => break e,
        }
    };

    assert_eq!(results, vec![0, to_result(STACK_MAX), 0, 0, 65281, 125, 125, 0]);
    assert!(matches!(
        err,
        RunError::Dispatch(DispatchError::UnregisteredInstruction(16))
    ));
    assert_eq!(stack.borrow().len(), 0);
}

#[test]
fn test_demo_stream_skip_policy_runs_to_end() {
    let (dispatcher, _stack) = stack_node();
    let summary = Runner::new(&dispatcher, SliceSource::new(&DEMO_STREAM))
        .on_unregistered(OnUnregistered::Skip)
        .run()
        .unwrap();

    assert_eq!(summary.dispatched, 8);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.results[1], to_result(STACK_MAX));
}

#[test]
fn test_get_max_reports_capacity() {
    let (dispatcher, _stack) = stack_node();
    assert_eq!(
        dispatcher.dispatch(op(GET_MAX)).unwrap(),
        to_result(STACK_MAX)
    );
}

#[test]
fn test_overfull_stack_keeps_latest_on_top() {
    let (dispatcher, _stack) = stack_node();
    dispatcher.dispatch(op(INIT)).unwrap();
    for i in 0..to_result(STACK_MAX) + 5 {
        dispatcher.dispatch(push(i)).unwrap();
    }

    let popped: Vec<i32> = (0..STACK_MAX)
        .map(|_| dispatcher.dispatch(op(POP)).unwrap())
        .collect();
    assert_eq!(popped, vec![14, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_empty_pop_is_ambiguous_but_try_pop_is_not() {
    let mut stack = Stack::new(2);
    stack.push(0);
    assert_eq!(stack.pop(), 0);
    assert_eq!(stack.pop(), 0);

    stack.push(0);
    assert_eq!(stack.try_pop(), Some(0));
    assert_eq!(stack.try_pop(), None);
}

#[test]
fn test_separate_nodes_do_not_share_state() {
    let (a, stack_a) = stack_node();
    let (b, stack_b) = stack_node();

    a.dispatch(push(1)).unwrap();
    b.dispatch(push(2)).unwrap();
    b.dispatch(push(3)).unwrap();

    assert_eq!(stack_a.borrow().len(), 1);
    assert_eq!(stack_b.borrow().len(), 2);
    assert_eq!(a.dispatch(op(PEEK)).unwrap(), 1);
}

#[test]
fn test_stack_max_override_parsing() {
    assert_eq!(parse_stack_max(None), STACK_MAX);
    assert_eq!(parse_stack_max(Some("4")), 4);
    assert_eq!(parse_stack_max(Some(" 32 ")), 32);
    assert_eq!(parse_stack_max(Some("0")), STACK_MAX);
    assert_eq!(parse_stack_max(Some("-3")), STACK_MAX);
    assert_eq!(parse_stack_max(Some("lots")), STACK_MAX);
}

#[test]
fn test_demo_stream_with_small_capacity() {
    let (dispatcher, stack) = stack_node_with(parse_stack_max(Some("1")));
    let summary = Runner::new(&dispatcher, SliceSource::new(&DEMO_STREAM))
        .on_unregistered(OnUnregistered::Skip)
        .run()
        .unwrap();

    // With room for one value, 65281 overwrites 125 and the peek sees nothing.
    assert_eq!(summary.results, vec![0, 1, 0, 0, 65281, 0, 0, 0]);
    assert_eq!(stack.borrow().max(), 1);
}
