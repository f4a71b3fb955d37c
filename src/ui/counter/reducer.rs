//! Reducer for the counter.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Saturates at i64::MAX
            CounterIntent::Increment => CounterState {
                count: state.count.saturating_add(1),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_adds_one() {
        let new = CounterReducer::reduce(CounterState::new(41), CounterIntent::Increment);
        assert_eq!(new.count, 42);
    }

    #[test]
    fn increment_from_negative() {
        let new = CounterReducer::reduce(CounterState::new(-1), CounterIntent::Increment);
        assert_eq!(new.count, 0);
    }

    #[test]
    fn increment_saturates_at_max() {
        let new = CounterReducer::reduce(CounterState::new(i64::MAX), CounterIntent::Increment);
        assert_eq!(new.count, i64::MAX);
    }

    #[test]
    fn reduce_is_pure() {
        let state = CounterState::new(7);
        let a = CounterReducer::reduce(state, CounterIntent::Increment);
        let b = CounterReducer::reduce(state, CounterIntent::Increment);
        assert_eq!(a, b);
        assert_eq!(state.count, 7);
    }
}
