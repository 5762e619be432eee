use dsviz::queue::Queue;
use dsviz::stack::Stack;

use std::collections::VecDeque;

use crate::Linear;

#[quickcheck]
fn stack_iter_is_reversed_pushes(xs: Vec<i32>) -> bool {
    let stack: Stack<_> = xs.iter().copied().collect();
    stack.iter().copied().eq(xs.iter().rev().copied()) && stack.len() == xs.len()
}

#[quickcheck]
fn stack_matches_vec(ops: Vec<Linear<i32>>) -> bool {
    let mut stack = Stack::new();
    let mut model = Vec::new();
    for op in ops {
        match op {
            Linear::Add(v) => {
                stack.push(v);
                model.push(v);
            }
            Linear::Take => {
                if stack.pop() != model.pop() {
                    return false;
                }
            }
        }
    }

    stack.len() == model.len() && stack.iter().copied().eq(model.into_iter().rev())
}

#[quickcheck]
fn queue_matches_vecdeque(ops: Vec<Linear<i32>>) -> bool {
    let mut queue = Queue::new();
    let mut model = VecDeque::new();
    for op in ops {
        match op {
            Linear::Add(v) => {
                queue.enqueue(v);
                model.push_back(v);
            }
            Linear::Take => {
                if queue.dequeue() != model.pop_front() {
                    return false;
                }
            }
        }
    }

    queue.len() == model.len() && queue.iter().copied().eq(model.into_iter())
}
