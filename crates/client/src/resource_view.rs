//! Client-side state for one resource list screen.

use std::time::Instant;

use portal_core::types::DbId;

use crate::api::PortalApi;
use crate::directory::EnrollmentDirectory;
use crate::error::ClientError;
use crate::notification::Notification;
use crate::resource::{Courses, Enrollments, Resource, Students};
use crate::view::{derive_view, ViewPage, ViewQuery};

/// The fetched list of one resource plus its search, sort and page state.
///
/// Every successful write re-reads the full list from the server; the
/// visible page is derived on demand by [`ResourceView::view`]. A failed
/// fetch keeps the previous list.
pub struct ResourceView<R: Resource> {
    api: PortalApi,
    items: Vec<R::Entity>,
    context: R::Context,
    query: ViewQuery<R::SortKey>,
    notification: Option<Notification>,
}

impl<R: Resource> ResourceView<R> {
    pub fn new(api: PortalApi) -> Self {
        Self {
            api,
            items: Vec::new(),
            context: R::Context::default(),
            query: ViewQuery::default(),
            notification: None,
        }
    }

    /// Everything fetched so far, in server order.
    pub fn items(&self) -> &[R::Entity] {
        &self.items
    }

    pub fn query(&self) -> &ViewQuery<R::SortKey> {
        &self.query
    }

    pub fn context(&self) -> &R::Context {
        &self.context
    }

    /// Re-read the full list. On failure the current items are kept and an
    /// error notification is raised.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.api.list::<R>().await {
            Ok(items) => {
                tracing::debug!(resource = R::PATH, count = items.len(), "List fetched");
                self.items = items;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(resource = R::PATH, error = %err, "Failed to fetch list");
                self.notification = Some(Notification::error(format!(
                    "An error occurred while fetching {}.",
                    R::PATH
                )));
                Err(err)
            }
        }
    }

    /// Create a row, then re-read the list.
    pub async fn create(&mut self, input: &R::Input) -> Result<R::Entity, ClientError> {
        let result = self.api.create::<R>(input).await;
        self.after_save(result).await
    }

    /// Replace a row, then re-read the list.
    pub async fn update(&mut self, id: DbId, input: &R::Input) -> Result<R::Entity, ClientError> {
        let result = self.api.update::<R>(id, input).await;
        self.after_save(result).await
    }

    /// Delete a row, then re-read the list.
    pub async fn delete(&mut self, id: DbId) -> Result<(), ClientError> {
        match self.api.delete::<R>(id).await {
            Ok(()) => {
                tracing::info!(resource = R::PATH, id, "Deleted");
                self.notification = Some(Notification::success(format!(
                    "{} deleted successfully.",
                    label::<R>()
                )));
                // A failed re-read reports itself through the notification.
                self.refresh().await.ok();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(resource = R::PATH, id, error = %err, "Delete failed");
                self.notification = Some(Notification::error(format!(
                    "An error occurred while deleting the {}.",
                    R::NAME
                )));
                Err(err)
            }
        }
    }

    async fn after_save(
        &mut self,
        result: Result<R::Entity, ClientError>,
    ) -> Result<R::Entity, ClientError> {
        match result {
            Ok(entity) => {
                tracing::info!(resource = R::PATH, id = R::id(&entity), "Saved");
                self.notification = Some(Notification::success(format!(
                    "{} saved successfully.",
                    label::<R>()
                )));
                self.refresh().await.ok();
                Ok(entity)
            }
            Err(err) => {
                tracing::warn!(resource = R::PATH, error = %err, "Save failed");
                self.notification = Some(Notification::error(format!(
                    "An error occurred while saving the {}.",
                    R::NAME
                )));
                Err(err)
            }
        }
    }

    /// Change the search term and go back to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.query.page = 1;
    }

    pub fn set_sort(&mut self, sort: R::SortKey) {
        self.query.sort = sort;
    }

    /// Select a 1-based page. Out-of-range values are clamped by [`Self::view`].
    pub fn set_page(&mut self, page: usize) {
        self.query.page = page;
    }

    /// The current page of the filtered, sorted list.
    pub fn view(&self) -> ViewPage<R::Entity> {
        derive_view(
            &self.items,
            &self.query.search,
            self.query.page,
            R::PAGE_SIZE,
            |entity, needle| R::matches(entity, needle, &self.context),
            |a, b| R::compare(a, b, self.query.sort, &self.context),
        )
    }

    /// The latest notification, if it has not auto-hidden yet.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification_at(Instant::now())
    }

    pub fn notification_at(&self, now: Instant) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| n.is_visible_at(now))
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}

impl ResourceView<Enrollments> {
    /// Re-read students and courses so enrollments can be searched by name.
    pub async fn refresh_directory(&mut self) -> Result<(), ClientError> {
        let fetched = tokio::try_join!(
            self.api.list::<Students>(),
            self.api.list::<Courses>()
        );
        match fetched {
            Ok((students, courses)) => {
                self.context = EnrollmentDirectory::new(&students, &courses);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch enrollment directory");
                self.notification = Some(Notification::error(
                    "An error occurred while fetching enrollments.",
                ));
                Err(err)
            }
        }
    }
}

/// `"student"` -> `"Student"`.
fn label<R: Resource>() -> String {
    let mut chars = R::NAME.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
