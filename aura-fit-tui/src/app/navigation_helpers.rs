// aura-fit-tui/src/app/navigation_helpers.rs
use ratatui::widgets::ListState;

pub fn list_next(state: &mut ListState, list_len: usize) {
    if list_len == 0 {
        state.select(None);
        return;
    }
    let i = match state.selected() {
        Some(i) if i >= list_len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    };
    state.select(Some(i));
}

pub fn list_previous(state: &mut ListState, list_len: usize) {
    if list_len == 0 {
        state.select(None);
        return;
    }
    let i = match state.selected() {
        Some(0) => list_len - 1,
        Some(i) => (i - 1).min(list_len - 1),
        None => list_len - 1,
    };
    state.select(Some(i));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_wrap() {
        let mut state = ListState::default();
        list_next(&mut state, 3);
        assert_eq!(state.selected(), Some(0));
        list_previous(&mut state, 3);
        assert_eq!(state.selected(), Some(2));
        list_next(&mut state, 3);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn empty_list_clears_selection() {
        let mut state = ListState::default();
        state.select(Some(4));
        list_next(&mut state, 0);
        assert_eq!(state.selected(), None);
    }
}
