//! Generic CRUD client over the admin resources.
//!
//! Each resource is a zero-sized marker implementing [`Resource`] plus one
//! capability trait per supported operation, so calling an operation the
//! backend does not expose (e.g. `update` on assignments) does not compile.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use cahier_core::drafts::{
    AssignmentDraft, FiliereDraft, GroupeDraft, MatiereDraft, ModuleDraft, ProfessorDraft,
};
use cahier_core::entities::{Assignment, Filiere, Groupe, Logbook, Matiere, Module, Professor};
use cahier_core::envelope::{Ack, Envelope, Page};

use crate::error::ApiError;
use crate::gateway::{Gateway, RequestOptions};

/// A backend collection rooted at [`Resource::PATH`].
pub trait Resource {
    /// Collection path below the base URL, e.g. `/admin/filieres`.
    const PATH: &'static str;
    /// Name used in logs.
    const NAME: &'static str;
    /// Record returned by the backend.
    type Record: DeserializeOwned + Send;
    /// Payload accepted by create and update.
    type Draft: Serialize + Sync;
}

/// `GET {PATH}?page=N`
pub trait Listable: Resource {}
/// `POST {PATH}`
pub trait Creatable: Resource {}
/// `GET {PATH}/{id}`
pub trait Showable: Resource {}
/// `PUT {PATH}/{id}`
pub trait Updatable: Resource {}
/// `DELETE {PATH}/{id}`
pub trait Deletable: Resource {}

macro_rules! resource {
    (
        $(#[$meta:meta])*
        $name:ident: $path:literal => $record:ty, $draft:ty; [$($cap:ident),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub enum $name {}

        impl Resource for $name {
            const PATH: &'static str = $path;
            const NAME: &'static str = stringify!($name);
            type Record = $record;
            type Draft = $draft;
        }

        $(impl $cap for $name {})+
    };
}

resource! {
    /// Professor accounts, `/admin/professeurs`.
    Professors: "/admin/professeurs" => Professor, ProfessorDraft;
    [Listable, Creatable, Showable, Updatable, Deletable]
}

resource! {
    /// Programs of study, `/admin/filieres`.
    Filieres: "/admin/filieres" => Filiere, FiliereDraft;
    [Listable, Creatable, Showable, Updatable, Deletable]
}

resource! {
    /// Course modules, `/admin/modules`.
    Modules: "/admin/modules" => Module, ModuleDraft;
    [Listable, Creatable, Showable, Updatable, Deletable]
}

resource! {
    /// Subjects within modules, `/admin/matieres`.
    Matieres: "/admin/matieres" => Matiere, MatiereDraft;
    [Listable, Creatable, Showable, Updatable, Deletable]
}

resource! {
    /// Student groups, `/admin/groupes`.
    Groupes: "/admin/groupes" => Groupe, GroupeDraft;
    [Listable, Creatable, Showable, Updatable, Deletable]
}

resource! {
    /// Professor teaching assignments, `/admin/assignments`. No show or update.
    Assignments: "/admin/assignments" => Assignment, AssignmentDraft;
    [Listable, Creatable, Deletable]
}

resource! {
    /// Submitted logbooks as seen by an admin, `/admin/logbooks`.
    AdminLogbooks: "/admin/logbooks" => Logbook, ();
    [Listable]
}

/// Client for one resource collection.
pub struct ResourceClient<R> {
    gateway: Gateway,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: Resource> fmt::Debug for ResourceClient<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("resource", &R::NAME)
            .field("base_url", &self.gateway.base_url())
            .finish()
    }
}

impl<R: Resource> ResourceClient<R> {
    #[must_use]
    pub const fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            resource: PhantomData,
        }
    }

    pub(crate) const fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub(crate) fn item_path(id: u64) -> String {
        format!("{}/{id}", R::PATH)
    }
}

impl<R: Listable> ResourceClient<R> {
    /// Records of page `page` (1-based).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn list(&self, page: u32) -> Result<Vec<R::Record>, ApiError> {
        Ok(self.list_page(page).await?.into_data())
    }

    /// Page `page` with its pagination metadata. A body without `data` is an
    /// empty page.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn list_page(&self, page: u32) -> Result<Page<R::Record>, ApiError> {
        let endpoint = format!("{}?page={page}", R::PATH);
        let page: Page<R::Record> = self
            .gateway
            .send_json_or_default(&endpoint, RequestOptions::get())
            .await?;
        tracing::debug!(resource = R::NAME, records = page.data.len(), "listed");
        Ok(page)
    }
}

impl<R: Creatable> ResourceClient<R> {
    /// # Errors
    ///
    /// Returns [`ApiError`] on encode, transport, status or decode failure.
    pub async fn create(&self, draft: &R::Draft) -> Result<R::Record, ApiError> {
        let options = RequestOptions::post().json(draft)?;
        let created: Envelope<R::Record> = self.gateway.send_json(R::PATH, options).await?;
        tracing::info!(resource = R::NAME, "created");
        Ok(created.into_inner())
    }
}

impl<R: Showable> ResourceClient<R> {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn show(&self, id: u64) -> Result<R::Record, ApiError> {
        let record: Envelope<R::Record> = self.gateway.get_json(&Self::item_path(id)).await?;
        Ok(record.into_inner())
    }
}

impl<R: Updatable> ResourceClient<R> {
    /// Replace record `id` (PUT).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on encode, transport, status or decode failure.
    pub async fn update(&self, id: u64, draft: &R::Draft) -> Result<R::Record, ApiError> {
        let options = RequestOptions::put().json(draft)?;
        let updated: Envelope<R::Record> =
            self.gateway.send_json(&Self::item_path(id), options).await?;
        tracing::info!(resource = R::NAME, id, "updated");
        Ok(updated.into_inner())
    }
}

impl<R: Deletable> ResourceClient<R> {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or status failure.
    pub async fn delete(&self, id: u64) -> Result<Ack, ApiError> {
        let ack = self
            .gateway
            .send_json_or_default(&Self::item_path(id), RequestOptions::delete())
            .await?;
        tracing::info!(resource = R::NAME, id, "deleted");
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_backend_routes() {
        assert_eq!(Professors::PATH, "/admin/professeurs");
        assert_eq!(Filieres::PATH, "/admin/filieres");
        assert_eq!(Modules::PATH, "/admin/modules");
        assert_eq!(Matieres::PATH, "/admin/matieres");
        assert_eq!(Groupes::PATH, "/admin/groupes");
        assert_eq!(Assignments::PATH, "/admin/assignments");
        assert_eq!(AdminLogbooks::PATH, "/admin/logbooks");
    }

    #[test]
    fn item_path_appends_id() {
        assert_eq!(ResourceClient::<Groupes>::item_path(9), "/admin/groupes/9");
        assert_eq!(Professors::NAME, "Professors");
    }
}
