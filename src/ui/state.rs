//! Local UI state: the open/closed machine shared by the sidebar and sheets,
//! and the focus ring over the dashboard's panels.

/// Two-state visibility of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// Transition request sent to a visibility holder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityAction {
    Open,
    Close,
}

impl Visibility {
    pub fn is_open(self) -> bool {
        self == Visibility::Open
    }

    /// Next state after `action`. Repeating an action is a no-op.
    pub fn apply(self, action: VisibilityAction) -> Self {
        match action {
            VisibilityAction::Open => Visibility::Open,
            VisibilityAction::Close => Visibility::Closed,
        }
    }
}

/// Focusable regions of the dashboard, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Sidebar,
    Notifications,
    Performance,
    LeadSources,
    Leads,
    Report,
}

impl Region {
    pub const RING: [Region; 6] = [
        Region::Sidebar,
        Region::Notifications,
        Region::Performance,
        Region::LeadSources,
        Region::Leads,
        Region::Report,
    ];

    fn position(self) -> usize {
        Self::RING.iter().position(|r| *r == self).unwrap_or(0)
    }

    /// Next region in Tab order, skipping the sidebar when it is hidden
    pub fn next(self, sidebar_visible: bool) -> Region {
        self.step(1, sidebar_visible)
    }

    /// Previous region in Tab order, skipping the sidebar when it is hidden
    pub fn previous(self, sidebar_visible: bool) -> Region {
        self.step(Self::RING.len() - 1, sidebar_visible)
    }

    fn step(self, by: usize, sidebar_visible: bool) -> Region {
        let len = Self::RING.len();
        let mut index = self.position();
        loop {
            index = (index + by) % len;
            let candidate = Self::RING[index];
            if candidate != Region::Sidebar || sidebar_visible {
                return candidate;
            }
        }
    }
}
