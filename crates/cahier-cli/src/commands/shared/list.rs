use std::future::Future;

use cahier_client::{ApiError, ListScreen, ScreenState};

use super::hint;

/// Run one list fetch through a [`ListScreen`] and return the applied records.
pub async fn load<T, F, Fut>(fetch: F) -> anyhow::Result<Vec<T>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>, ApiError>>,
{
    let mut screen = ListScreen::new();
    screen.refresh(fetch).await;

    match screen.into_state() {
        ScreenState::Ready { items } => Ok(items),
        ScreenState::Failed { kind, message } => {
            let error = anyhow::anyhow!(message);
            Err(match hint::for_kind(kind) {
                Some(hint) => error.context(hint),
                None => error,
            })
        }
        ScreenState::Loading | ScreenState::Editing { .. } => {
            anyhow::bail!("list response was discarded")
        }
    }
}

#[cfg(test)]
mod tests {
    use cahier_client::ApiError;

    use super::load;

    #[tokio::test]
    async fn ready_returns_items() {
        let items = load(|| async { Ok::<_, ApiError>(vec![1, 2, 3]) })
            .await
            .expect("items");
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn failure_keeps_server_message() {
        let error = load::<u8, _, _>(|| async {
            Err(ApiError::Api {
                status: 401,
                message: "Unauthenticated.".into(),
                errors: None,
            })
        })
        .await
        .expect_err("should fail");
        let rendered = format!("{error:#}");
        assert!(rendered.contains("Unauthenticated."));
        assert!(rendered.contains("cahier auth login"));
    }
}
