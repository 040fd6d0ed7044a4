use std::future::Future;

use anyhow::anyhow;
use cahier_client::{ApiError, ListScreen, ScreenState};
use cahier_core::CoreError;

use super::hint;

/// Submit a create/update form the way an admin screen does: open the form,
/// check the draft locally, send it, then reload with the saved record.
///
/// A failed local check closes the form and nothing is sent. A rejected
/// submit keeps the form open; its message is reported together with the
/// per-field errors the backend returned.
pub async fn submit<R, S, Fut>(check: Result<(), CoreError>, send: S) -> anyhow::Result<R>
where
    S: FnOnce() -> Fut,
    Fut: Future<Output = Result<R, ApiError>>,
{
    let mut screen = ListScreen::with_items(Vec::new());
    screen.begin_edit();

    if let Err(error) = check {
        screen.cancel_edit();
        return Err(error.into());
    }

    match send().await {
        Ok(record) => {
            let ticket = screen.submit_succeeded();
            screen.finish_fetch(ticket, Ok(vec![record]));
            match screen.into_state() {
                ScreenState::Ready { mut items } => {
                    items.pop().ok_or_else(|| anyhow!("saved record missing from reload"))
                }
                _ => anyhow::bail!("form response was discarded"),
            }
        }
        Err(error) => {
            screen.submit_failed(&error);
            let message = match screen.into_state() {
                ScreenState::Editing {
                    error: Some(message),
                    ..
                } => message,
                _ => error.message(),
            };
            let rejected = match field_summary(&error) {
                Some(fields) => anyhow!("{message} ({fields})"),
                None => anyhow!(message),
            };
            Err(match hint::for_kind(error.kind()) {
                Some(hint) => rejected.context(hint),
                None => rejected,
            })
        }
    }
}

fn field_summary(error: &ApiError) -> Option<String> {
    let ApiError::Api {
        errors: Some(errors),
        ..
    } = error
    else {
        return None;
    };
    let fields = errors
        .iter()
        .flat_map(|(field, messages)| messages.iter().map(move |m| format!("{field}: {m}")))
        .collect::<Vec<_>>();
    (!fields.is_empty()).then(|| fields.join("; "))
}
