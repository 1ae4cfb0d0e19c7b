/// Hook that a solver calls once per iteration.
///
/// Returning `Some(action)` asks the solver to act on it (each solver defines
/// its own action type). Returning `None` lets the iteration continue.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, `()` never acts, and
/// `&mut O` forwards to `O` so callers can inspect an observer after a solve.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

/// Keeps a copy of every event it sees and never acts.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder<E> {
    events: Vec<E>,
}

impl<E> Default for Recorder<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E> Recorder<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in the order they were observed.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

impl<E: Clone, A> Observer<E, A> for Recorder<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events.push(event.clone());
        None
    }
}

impl<E, A> Observer<E, A> for &mut Recorder<E>
where
    Recorder<E>: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O>(mut observer: O, events: &[usize]) -> Vec<&'static str>
    where
        O: Observer<usize, &'static str>,
    {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), &[1, 2, 3]).is_empty());
    }

    #[test]
    fn closure_observer_can_act_and_capture_state() {
        let mut seen = 0;
        let actions = drive(
            |event: &usize| {
                seen += 1;
                (*event == 2).then_some("stop")
            },
            &[1, 2, 3],
        );

        assert_eq!(actions, vec!["stop"]);
        assert_eq!(seen, 3);
    }

    #[test]
    fn borrowed_recorder_keeps_events_after_the_run() {
        let mut recorder = Recorder::<usize>::new();
        assert!(drive(&mut recorder, &[4, 5]).is_empty());
        assert_eq!(recorder.events(), &[4, 5]);
        assert_eq!(recorder.into_events(), vec![4, 5]);
    }
}
