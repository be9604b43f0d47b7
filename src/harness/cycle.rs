//! Round-robin replay over a request sequence.

use crate::fixture::RouteRequest;

/// Endless cursor over `requests`, wrapping to index 0 when exhausted.
#[derive(Debug, Clone)]
pub struct RequestCycle<'a> {
    requests: &'a [RouteRequest],
    cursor: usize,
}

impl<'a> RequestCycle<'a> {
    pub fn new(requests: &'a [RouteRequest]) -> Self {
        Self { requests, cursor: 0 }
    }

    /// Next request in round-robin order, or `None` if the sequence is empty.
    pub fn next_request(&mut self) -> Option<&'a RouteRequest> {
        if self.cursor >= self.requests.len() {
            self.cursor = 0;
        }
        let request = self.requests.get(self.cursor)?;
        self.cursor += 1;
        Some(request)
    }

    /// Index the next call to [`next_request`](Self::next_request) returns.
    pub fn position(&self) -> usize {
        if self.cursor >= self.requests.len() {
            0
        } else {
            self.cursor
        }
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

impl<'a> Iterator for RequestCycle<'a> {
    type Item = &'a RouteRequest;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_request()
    }
}
