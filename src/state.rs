//! Navigation history.

use crate::location::Location;

/// Direction of a committed navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Forward,
    Back,
    Replace,
}

/// A committed history change.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteChangeEvent {
    pub from: Option<String>,
    pub to: String,
    pub direction: NavigationDirection,
}

/// History stack of resolved locations.
#[derive(Debug)]
pub struct RouterState {
    history: Vec<Location>,
    current: usize,
    /// Bumped by every navigation attempt; a navigation that suspended in a
    /// guard only commits if it is still the latest one.
    navigation_id: usize,
}

impl RouterState {
    /// History containing only the unmatched root location.
    pub fn new() -> Self {
        Self {
            history: vec![Location::unmatched("/")],
            current: 0,
            navigation_id: 0,
        }
    }

    pub fn navigation_id(&self) -> usize {
        self.navigation_id
    }

    /// Start a navigation and return its ID.
    pub fn start_navigation(&mut self) -> usize {
        self.navigation_id = self.navigation_id.wrapping_add(1);
        self.navigation_id
    }

    /// Whether no newer navigation has started since `nav_id`.
    pub fn is_navigation_current(&self, nav_id: usize) -> bool {
        self.navigation_id == nav_id
    }

    pub fn current(&self) -> &Location {
        &self.history[self.current]
    }

    pub fn current_path(&self) -> &str {
        &self.current().path
    }

    /// Push a location, dropping any forward history.
    pub fn push(&mut self, location: Location) -> RouteChangeEvent {
        let from = Some(self.current().full_path());
        let to = location.full_path();

        self.history.truncate(self.current + 1);
        self.history.push(location);
        self.current += 1;

        RouteChangeEvent {
            from,
            to,
            direction: NavigationDirection::Forward,
        }
    }

    pub fn replace(&mut self, location: Location) -> RouteChangeEvent {
        let from = Some(self.current().full_path());
        let to = location.full_path();
        self.history[self.current] = location;

        RouteChangeEvent {
            from,
            to,
            direction: NavigationDirection::Replace,
        }
    }

    /// Step back, replacing the entry with a freshly resolved `location`.
    pub fn back(&mut self, location: Location) -> Option<RouteChangeEvent> {
        if !self.can_go_back() {
            return None;
        }
        let from = Some(self.current().full_path());
        self.current -= 1;
        let to = location.full_path();
        self.history[self.current] = location;

        Some(RouteChangeEvent {
            from,
            to,
            direction: NavigationDirection::Back,
        })
    }

    /// Step forward, replacing the entry with a freshly resolved `location`.
    pub fn forward(&mut self, location: Location) -> Option<RouteChangeEvent> {
        if !self.can_go_forward() {
            return None;
        }
        let from = Some(self.current().full_path());
        self.current += 1;
        let to = location.full_path();
        self.history[self.current] = location;

        Some(RouteChangeEvent {
            from,
            to,
            direction: NavigationDirection::Forward,
        })
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.history.len()
    }

    /// Full path `back()` would go to.
    pub fn peek_back(&self) -> Option<String> {
        self.current
            .checked_sub(1)
            .map(|index| self.history[index].full_path())
    }

    /// Full path `forward()` would go to.
    pub fn peek_forward(&self) -> Option<String> {
        self.history.get(self.current + 1).map(Location::full_path)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Reset to the root location.
    pub fn clear(&mut self) {
        self.history.clear();
        self.history.push(Location::unmatched("/"));
        self.current = 0;
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self::new()
    }
}
