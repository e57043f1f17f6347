//! Presentation-side orchestration.
//!
//! The presenter takes raw text input and runs it through the engine. The
//! auxiliary services are fired separately, once the caller has shown the
//! result. Service failures are logged and never touch the computed result.

use crate::config::Config;
use crate::services::{CameraService, NotificationService, ShareService};
use crate::{engine, BmiResult, Error, Measurement, Result};
use chrono::Utc;

/// Holds the services plus the last result and captured image
pub struct Presenter<N, S, C> {
    config: Config,
    notifier: N,
    sharer: S,
    camera: C,
    result: Option<BmiResult>,
    captured_image: Option<String>,
}

impl<N, S, C> Presenter<N, S, C>
where
    N: NotificationService,
    S: ShareService,
    C: CameraService,
{
    pub fn new(config: Config, notifier: N, sharer: S, camera: C) -> Self {
        Self {
            config,
            notifier,
            sharer,
            camera,
            result: None,
            captured_image: None,
        }
    }

    /// Last successfully computed result
    pub fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    /// Last successfully captured image URI
    pub fn captured_image(&self) -> Option<&str> {
        self.captured_image.as_deref()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Parse, validate and compute, storing the result as the current one.
    ///
    /// Invalid input returns [`Error::InvalidInput`] and leaves any previous
    /// result in place. The engine is not called in that case.
    pub fn calculate(&mut self, height: &str, weight: &str) -> Result<BmiResult> {
        let measurement = Measurement::parse(height, weight)?;
        let result = engine::compute_measurement(&measurement)?;
        self.result = Some(result);

        tracing::info!(
            "BMI {} for {} cm / {} kg",
            result,
            measurement.height_cm,
            measurement.weight_kg
        );

        Ok(result)
    }

    /// Schedule the notification for the current result.
    ///
    /// Fails with [`Error::NoResult`] before the first successful calculation.
    /// A notification service failure is only logged.
    pub fn notify_result(&self) -> Result<()> {
        let result = self.result.ok_or(Error::NoResult)?;
        let settings = &self.config.notification;
        if !settings.enabled {
            tracing::debug!("Notifications disabled, skipping");
            return Ok(());
        }

        let body = format!("Your BMI is: {}", result);
        match self.notifier.schedule(&settings.title, &body, settings.delay()) {
            Ok(()) => {
                let fire_at = Utc::now()
                    + chrono::Duration::milliseconds(settings.delay_ms as i64);
                tracing::debug!("Notification scheduled for {}", fire_at.to_rfc3339());
            }
            Err(e) => tracing::warn!("Failed to schedule notification: {}", e),
        }
        Ok(())
    }

    /// Share the current result.
    ///
    /// Fails with [`Error::NoResult`] before the first successful calculation.
    pub fn share_result(&self) -> Result<()> {
        let result = self.result.ok_or(Error::NoResult)?;
        let text = format!("My BMI is: {}", result);
        self.sharer.share(&self.config.share.title, &text).map_err(|e| {
            tracing::warn!("Failed to share result: {}", e);
            Error::from(e)
        })
    }

    /// Capture a photo. Failures are logged and yield `None`.
    pub fn take_picture(&mut self) -> Option<String> {
        match self.camera.capture() {
            Ok(uri) => {
                tracing::info!("Image URI: {}", uri);
                self.captured_image = Some(uri.clone());
                Some(uri)
            }
            Err(e) => {
                tracing::error!("Failed to capture image: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ServiceError, ServiceResult};
    use crate::BmiCategory;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingNotifier {
        fail: bool,
        sent: Mutex<Vec<(String, String, Duration)>>,
    }

    impl NotificationService for RecordingNotifier {
        fn schedule(&self, title: &str, body: &str, fire_delay: Duration) -> ServiceResult<()> {
            if self.fail {
                return Err(ServiceError::PermissionDenied("notifications".into()));
            }
            self.sent
                .lock()
                .unwrap()
                .push((title.into(), body.into(), fire_delay));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingShare {
        fail: bool,
        shared: Mutex<Vec<(String, String)>>,
    }

    impl ShareService for RecordingShare {
        fn share(&self, title: &str, text: &str) -> ServiceResult<()> {
            if self.fail {
                return Err(ServiceError::Cancelled);
            }
            self.shared.lock().unwrap().push((title.into(), text.into()));
            Ok(())
        }
    }

    struct StubCamera(Option<&'static str>);

    impl CameraService for StubCamera {
        fn capture(&self) -> ServiceResult<String> {
            self.0
                .map(String::from)
                .ok_or_else(|| ServiceError::Unavailable("no camera".into()))
        }
    }

    fn presenter(
        notifier: RecordingNotifier,
        sharer: RecordingShare,
        camera: StubCamera,
    ) -> Presenter<RecordingNotifier, RecordingShare, StubCamera> {
        crate::logging::init_test();
        Presenter::new(Config::default(), notifier, sharer, camera)
    }

    #[test]
    fn test_calculate_stores_result_without_notifying() {
        let mut p = presenter(
            RecordingNotifier::default(),
            RecordingShare::default(),
            StubCamera(None),
        );

        let result = p.calculate("170", "70").unwrap();
        assert_eq!(result.value, 24.22);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(p.result(), Some(&result));
        assert!(p.notifier.sent.lock().unwrap().is_empty());

        p.notify_result().unwrap();
        let sent = p.notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "BMI Result");
        assert_eq!(sent[0].1, "Your BMI is: 24.22 (Normal)");
        assert_eq!(sent[0].2, Duration::from_millis(1000));
    }

    #[test]
    fn test_invalid_input_does_not_notify_or_replace_result() {
        let mut p = presenter(
            RecordingNotifier::default(),
            RecordingShare::default(),
            StubCamera(None),
        );

        let first = p.calculate("200", "100").unwrap();
        p.notify_result().unwrap();
        let err = p.calculate("0", "70").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        assert_eq!(p.result(), Some(&first));
        assert_eq!(p.notifier.sent.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_notification_failure_keeps_result() {
        let notifier = RecordingNotifier {
            fail: true,
            ..Default::default()
        };
        let mut p = presenter(notifier, RecordingShare::default(), StubCamera(None));

        let result = p.calculate("160", "48").unwrap();
        p.notify_result().unwrap();
        assert_eq!(result.value, 18.75);
        assert_eq!(p.result(), Some(&result));
    }

    #[test]
    fn test_notifications_can_be_disabled() {
        crate::logging::init_test();
        let mut config = Config::default();
        config.notification.enabled = false;
        let mut p = Presenter::new(
            config,
            RecordingNotifier::default(),
            RecordingShare::default(),
            StubCamera(None),
        );

        p.calculate("170", "70").unwrap();
        p.notify_result().unwrap();
        assert!(p.notifier.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_notify_without_result() {
        let p = presenter(
            RecordingNotifier::default(),
            RecordingShare::default(),
            StubCamera(None),
        );

        assert!(matches!(p.notify_result(), Err(Error::NoResult)));
        assert!(p.notifier.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_share_without_result() {
        let p = presenter(
            RecordingNotifier::default(),
            RecordingShare::default(),
            StubCamera(None),
        );

        assert!(matches!(p.share_result(), Err(Error::NoResult)));
        assert!(p.sharer.shared.lock().unwrap().is_empty());
    }

    #[test]
    fn test_share_result_text() {
        let mut p = presenter(
            RecordingNotifier::default(),
            RecordingShare::default(),
            StubCamera(None),
        );

        p.calculate("200", "100").unwrap();
        p.share_result().unwrap();

        let shared = p.sharer.shared.lock().unwrap();
        assert_eq!(
            shared[0],
            ("BMI Result".to_string(), "My BMI is: 25.00 (Overweight)".to_string())
        );
    }

    #[test]
    fn test_share_failure_keeps_result() {
        let sharer = RecordingShare {
            fail: true,
            ..Default::default()
        };
        let mut p = presenter(RecordingNotifier::default(), sharer, StubCamera(None));

        let result = p.calculate("170", "70").unwrap();
        assert!(matches!(
            p.share_result(),
            Err(Error::Service(ServiceError::Cancelled))
        ));
        assert_eq!(p.result(), Some(&result));
    }

    #[test]
    fn test_take_picture() {
        let mut p = presenter(
            RecordingNotifier::default(),
            RecordingShare::default(),
            StubCamera(Some("file:///tmp/photo.jpg")),
        );

        assert_eq!(p.take_picture().as_deref(), Some("file:///tmp/photo.jpg"));
        assert_eq!(p.captured_image(), Some("file:///tmp/photo.jpg"));
    }

    #[test]
    fn test_camera_failure_yields_none() {
        let mut p = presenter(
            RecordingNotifier::default(),
            RecordingShare::default(),
            StubCamera(None),
        );

        p.calculate("170", "70").unwrap();
        assert_eq!(p.take_picture(), None);
        assert_eq!(p.captured_image(), None);
        assert!(p.result().is_some());
    }
}
