//! View state of the portfolio page and the layout derived from it
//!
//! Rendering is a pure function of the latest [`ViewState`]: [`Layout::plan`]
//! decides what is on screen, and the UI layer only maps the plan to markup.

use super::Section;

/// Loading dimension of the view state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Initial state, the loading placeholder is shown
    Loading,
    /// Terminal state, the main layout is shown
    Ready,
}

/// Ephemeral state owned by the view controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    pub active_section: Section,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            loading: true,
            active_section: Section::Intro,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else {
            Phase::Ready
        }
    }

    /// Flip `loading` to false.
    ///
    /// Returns true only for the call that performed the transition.
    pub fn finish_loading(&mut self) -> bool {
        if !self.loading {
            return false;
        }
        self.loading = false;
        true
    }

    /// Set the active section.
    ///
    /// Returns true if the state changed.
    pub fn select_section(&mut self, target: Section) -> bool {
        if self.active_section == target {
            return false;
        }
        self.active_section = target;
        true
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// One navigation control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub active: bool,
}

/// What the page shows for a given state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Only the loading placeholder
    Loading,
    /// Header, navigation and exactly one content block
    Ready {
        nav: [NavItem; 4],
        content: Section,
    },
}

impl Layout {
    pub fn plan(state: &ViewState) -> Self {
        match state.phase() {
            Phase::Loading => Layout::Loading,
            Phase::Ready => Layout::Ready {
                nav: Section::ALL.map(|section| NavItem {
                    section,
                    active: section == state.active_section,
                }),
                content: state.active_section,
            },
        }
    }

    /// Content blocks present in this layout
    pub fn content_blocks(&self) -> Vec<Section> {
        match self {
            Layout::Loading => Vec::new(),
            Layout::Ready { content, .. } => vec![*content],
        }
    }

    pub fn nav(&self) -> &[NavItem] {
        match self {
            Layout::Loading => &[],
            Layout::Ready { nav, .. } => nav,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert!(state.loading);
        assert_eq!(state.active_section, Section::Intro);
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn test_finish_loading_only_once() {
        let mut state = ViewState::new();
        assert!(state.finish_loading());
        assert!(!state.finish_loading());
        assert!(!state.loading);
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn test_select_section_reports_change() {
        let mut state = ViewState::new();
        assert!(!state.select_section(Section::Intro));
        assert!(state.select_section(Section::Skills));
        assert!(!state.select_section(Section::Skills));
        assert_eq!(state.active_section, Section::Skills);
    }

    #[test]
    fn test_selection_while_loading_stays_hidden() {
        let mut state = ViewState::new();
        state.select_section(Section::Projects);
        assert_eq!(Layout::plan(&state), Layout::Loading);

        state.finish_loading();
        assert_eq!(Layout::plan(&state).content_blocks(), vec![Section::Projects]);
    }

    #[test]
    fn test_loading_layout_has_no_content() {
        let layout = Layout::plan(&ViewState::new());
        assert!(layout.content_blocks().is_empty());
        assert!(layout.nav().is_empty());
    }

    #[test]
    fn test_ready_layout_marks_exactly_one_active() {
        for target in Section::ALL {
            let mut state = ViewState::new();
            state.finish_loading();
            state.select_section(target);

            let layout = Layout::plan(&state);
            assert_eq!(layout.content_blocks(), vec![target]);

            let nav = layout.nav();
            assert_eq!(nav.len(), 4);
            let active: Vec<_> = nav.iter().filter(|item| item.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].section, target);
        }
    }

    #[test]
    fn test_nav_follows_section_order() {
        let mut state = ViewState::new();
        state.finish_loading();
        let sections: Vec<_> = Layout::plan(&state)
            .nav()
            .iter()
            .map(|item| item.section)
            .collect();
        assert_eq!(sections, Section::ALL.to_vec());
    }
}
