use std::cmp::Ordering;

use crate::model::Condition;

/// Interleave today's history with today's forecast in time order.
///
/// Both inputs must be ascending. On equal timestamps the forecast slot is
/// kept and the history slot dropped.
pub fn merge_today(history: Vec<Condition>, future: Vec<Condition>) -> Vec<Condition> {
    let mut merged = Vec::with_capacity(history.len() + future.len());
    let mut history = history.into_iter().peekable();
    let mut future = future.into_iter().peekable();

    loop {
        let next = match (history.peek(), future.peek()) {
            (None, None) => break,
            (Some(_), None) => history.next(),
            (None, Some(_)) => future.next(),
            (Some(h), Some(f)) => match h.time.cmp(&f.time) {
                Ordering::Greater => future.next(),
                Ordering::Less => history.next(),
                Ordering::Equal => {
                    history.next();
                    future.next()
                }
            },
        };
        merged.extend(next);
    }

    merged
}
