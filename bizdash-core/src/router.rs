//! Route history and change notification

/// Receives the current path on every effective navigation change
pub trait RouteObserver {
    fn on_route_change(&mut self, path: &str);
}

/// Normalise a route path: rooted at `/`, no empty segments, no trailing
/// separator except root.
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.trim().split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Whether `path` is already in the form [`normalize_path`] produces
pub fn is_normalized(path: &str) -> bool {
    normalize_path(path) == path
}

/// Browser-like history of visited paths
#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<String>,
    index: usize,
}

impl Router {
    pub fn new(start: &str) -> Self {
        Self {
            history: vec![normalize_path(start)],
            index: 0,
        }
    }

    /// The path currently displayed
    pub fn current(&self) -> &str {
        &self.history[self.index]
    }

    /// Move to `path`, dropping forward history.
    ///
    /// Returns `false` when `path` is already current.
    pub fn push(&mut self, path: &str) -> bool {
        let path = normalize_path(path);
        if path == self.current() {
            return false;
        }
        self.history.truncate(self.index + 1);
        self.history.push(path);
        self.index += 1;
        true
    }

    /// Swap the current entry for `path` without growing history
    pub fn replace(&mut self, path: &str) -> bool {
        let path = normalize_path(path);
        if path == self.current() {
            return false;
        }
        self.history[self.index] = path;
        true
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.can_go_back() {
            self.index -= 1;
            Some(self.current())
        } else {
            None
        }
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.can_go_forward() {
            self.index += 1;
            Some(self.current())
        } else {
            None
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.history.len()
    }

    /// Push `path` and notify `observer` if the route changed
    pub fn navigate(&mut self, path: &str, observer: &mut impl RouteObserver) -> bool {
        let changed = self.push(path);
        if changed {
            log::debug!("Navigated to {}", self.current());
            observer.on_route_change(self.current());
        }
        changed
    }

    /// Replace the current entry with `path` and notify `observer` if the
    /// route changed. Used for redirects that should not leave a history entry.
    pub fn redirect(&mut self, path: &str, observer: &mut impl RouteObserver) -> bool {
        let changed = self.replace(path);
        if changed {
            log::debug!("Redirected to {}", self.current());
            observer.on_route_change(self.current());
        }
        changed
    }

    /// Step back and notify `observer`
    pub fn go_back(&mut self, observer: &mut impl RouteObserver) -> bool {
        match self.back() {
            Some(path) => {
                observer.on_route_change(path);
                true
            }
            None => false,
        }
    }

    /// Step forward and notify `observer`
    pub fn go_forward(&mut self, observer: &mut impl RouteObserver) -> bool {
        match self.forward() {
            Some(path) => {
                observer.on_route_change(path);
                true
            }
            None => false,
        }
    }

    /// Tell `observer` about the current route, e.g. right after mounting
    pub fn announce(&self, observer: &mut impl RouteObserver) {
        observer.on_route_change(self.current());
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl RouteObserver for Recorder {
        fn on_route_change(&mut self, path: &str) {
            self.0.push(path.to_string());
        }
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("invoices"), "/invoices");
        assert_eq!(normalize_path("/invoices/"), "/invoices");
        assert_eq!(normalize_path(" /reports "), "/reports");
        assert_eq!(normalize_path("//services//plans/"), "/services/plans");
    }

    #[test]
    fn test_is_normalized() {
        assert!(is_normalized("/"));
        assert!(is_normalized("/services/plans"));
        assert!(!is_normalized("/shop/"));
        assert!(!is_normalized("//x"));
        assert!(!is_normalized("shop"));
        assert!(!is_normalized(" /shop"));
    }

    #[test]
    fn test_push_same_path_is_noop() {
        let mut router = Router::default();
        assert!(!router.push("/"));
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_push_truncates_forward_history() {
        let mut router = Router::default();
        router.push("/invoices");
        router.push("/products");
        assert_eq!(router.back(), Some("/invoices"));
        assert!(router.can_go_forward());

        router.push("/customers");
        assert!(!router.can_go_forward());
        assert_eq!(router.back(), Some("/invoices"));
        assert_eq!(router.back(), Some("/"));
        assert_eq!(router.back(), None);
    }

    #[test]
    fn test_replace_keeps_history_length() {
        let mut router = Router::new("/invoices");
        assert!(router.replace("/invoices/INV-1001"));
        assert_eq!(router.current(), "/invoices/INV-1001");
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_observer_notified_once_per_change() {
        let mut router = Router::default();
        let mut recorder = Recorder::default();

        router.navigate("/invoices", &mut recorder);
        router.navigate("/invoices", &mut recorder);
        router.navigate("/reports/", &mut recorder);
        router.go_back(&mut recorder);
        router.go_forward(&mut recorder);
        router.go_forward(&mut recorder);

        assert_eq!(
            recorder.0,
            vec!["/invoices", "/reports", "/invoices", "/reports"]
        );
    }

    #[test]
    fn test_redirect_notifies_without_growing_history() {
        let mut router = Router::new("/invoices/INV-9999");
        let mut recorder = Recorder::default();

        assert!(router.redirect("/invoices", &mut recorder));
        assert!(!router.redirect("/invoices/", &mut recorder));

        assert_eq!(router.current(), "/invoices");
        assert!(!router.can_go_back());
        assert_eq!(recorder.0, vec!["/invoices"]);
    }

    #[test]
    fn test_announce_reports_current() {
        let router = Router::new("/categories");
        let mut recorder = Recorder::default();
        router.announce(&mut recorder);
        assert_eq!(recorder.0, vec!["/categories"]);
    }
}
