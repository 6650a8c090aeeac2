//! External URL host-service contracts.

use std::{cell::RefCell, rc::Rc};

/// Host service for opening external URLs outside the desktop shell.
///
/// Opening is fire-and-forget: the shell never waits on the new browsing context.
pub trait ExternalUrlService {
    /// Opens a URL using the host's external navigation mechanism.
    ///
    /// # Errors
    ///
    /// Returns an error when the host refuses to open the link (popup blocked, no window).
    fn open_url(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// External URL service that only records what it was asked to open.
pub struct RecordingExternalUrlService {
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingExternalUrlService {
    /// URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for RecordingExternalUrlService {
    fn open_url(&self, url: &str) -> Result<(), String> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn recording_service_keeps_open_order() {
        let service = RecordingExternalUrlService::default();
        let service_obj: &dyn ExternalUrlService = &service;
        service_obj.open_url("https://a.example").expect("open");
        service_obj.open_url("https://b.example").expect("open");
        assert_eq!(
            service.opened(),
            vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ]
        );
    }
}
