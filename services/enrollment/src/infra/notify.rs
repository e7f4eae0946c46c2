use crate::domain::repository::NotificationPort;
use crate::domain::types::Channel;
use crate::error::EnrollmentError;

/// Development notifier: logs the code instead of delivering it.
/// Swapped for a real mail/SMS gateway in deployment.
#[derive(Clone)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    async fn send(
        &self,
        channel: Channel,
        identifier: &str,
        code: &str,
    ) -> Result<(), EnrollmentError> {
        tracing::info!(
            channel = channel.as_str(),
            identifier,
            code,
            "otp dispatched"
        );
        Ok(())
    }
}
