//! Public-site projections: header, footer, gallery and hero.
//!
//! Header and footer are [`ConfigMount`]s. Each mount does its own config
//! read on start, then follows the broadcast stream until it is unmounted
//! or dropped. The hero runs its auto-advance timer in a [`HeroMount`].

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use nemitzam_core::branding::{self, Branding, SocialLink};
use nemitzam_core::gallery;
use nemitzam_core::rotator::{HeroRotator, AUTO_ADVANCE_INTERVAL, HERO_PROJECT_LIMIT};
use nemitzam_core::site_config::SiteConfig;
use nemitzam_core::types::Timestamp;
use nemitzam_db::models::project::Project;
use nemitzam_db::{Gateway, ListQuery};
use nemitzam_events::SiteEvent;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config_store::ConfigStore;

/// Year printed in the footer notice.
pub const COPYRIGHT_YEAR: i32 = 2024;

const HEADER_KEYS: &[&str] = &SiteConfig::HEADER_KEYS;

// ---------------------------------------------------------------------------
// Header / footer
// ---------------------------------------------------------------------------

/// A view derived from the site config.
pub trait ConfigProjection: Clone + Send + Sync + 'static {
    /// Keys the initial load asks for; `None` reads the whole table.
    const KEYS: Option<&'static [&'static str]>;

    fn project(config: &SiteConfig) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub site_name: String,
    pub branding: Branding,
    /// Browser document title.
    pub title: String,
}

impl ConfigProjection for HeaderView {
    const KEYS: Option<&'static [&'static str]> = Some(HEADER_KEYS);

    fn project(config: &SiteConfig) -> Self {
        Self {
            site_name: config.site_name.clone(),
            branding: branding::branding(config),
            title: branding::document_title(&config.site_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub site_name: String,
    pub links: Vec<SocialLink>,
    pub copyright: String,
}

impl ConfigProjection for FooterView {
    const KEYS: Option<&'static [&'static str]> = None;

    fn project(config: &SiteConfig) -> Self {
        Self {
            site_name: config.site_name.clone(),
            links: branding::social_links(config),
            copyright: branding::copyright_line(COPYRIGHT_YEAR, &config.site_name),
        }
    }
}

/// A mounted config-driven view.
pub struct ConfigMount<V> {
    view: watch::Receiver<V>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl<V: ConfigProjection> ConfigMount<V> {
    /// Start the view on the defaults, then load and follow broadcasts.
    pub fn mount(store: Arc<ConfigStore>) -> Self {
        let (tx, view) = watch::channel(V::project(&SiteConfig::default()));
        let cancel = CancellationToken::new();
        // Subscribe before loading so a save during the load is not missed.
        let events = store.subscribe();
        let task = tokio::spawn(follow_config(store, events, tx, cancel.clone()));
        Self {
            view,
            cancel,
            task: Some(task),
        }
    }

    /// Current projection.
    pub fn view(&self) -> V {
        self.view.borrow().clone()
    }

    /// A receiver notified on every change of the view.
    pub fn watch(&self) -> watch::Receiver<V> {
        self.view.clone()
    }

    /// Wait for the next change of the view.
    pub async fn changed(&mut self) -> bool {
        self.view.changed().await.is_ok()
    }

    /// Stop following broadcasts and wait for the task to finish.
    pub async fn unmount(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                tracing::warn!(error = %err, "Config mount task failed");
            }
        }
    }
}

impl<V> Drop for ConfigMount<V> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn follow_config<V: ConfigProjection>(
    store: Arc<ConfigStore>,
    mut events: broadcast::Receiver<SiteEvent>,
    tx: watch::Sender<V>,
    cancel: CancellationToken,
) {
    tokio::select! {
        () = cancel.cancelled() => return,
        loaded = store.fetch(V::KEYS) => {
            // On failure the defaults stay; the error is already logged.
            if let Ok(config) = loaded {
                tx.send_replace(V::project(&config));
            }
        }
    }

    loop {
        tokio::select! {
            () = cancel.cancelled() => break,
            event = events.recv() => match event {
                Ok(SiteEvent::SiteConfigUpdated { config, .. }) => {
                    tx.send_replace(V::project(&config));
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Config mount lagged behind broadcasts");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

/// Filterable project grid.
#[derive(Debug, Clone)]
pub struct Gallery {
    projects: Vec<Project>,
    selected: String,
}

impl Gallery {
    /// Fetch every project. A failed fetch shows an empty gallery.
    pub async fn load(gateway: &dyn Gateway) -> Self {
        let projects = match gateway.list_projects(ListQuery::all()).await {
            Ok(projects) => projects,
            Err(err) => {
                tracing::error!(error = %err, "Failed to load gallery projects");
                Vec::new()
            }
        };
        Self::from_projects(projects)
    }

    pub fn from_projects(projects: Vec<Project>) -> Self {
        Self {
            projects,
            selected: gallery::ALL_CATEGORIES.to_string(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// `"todas"` followed by each category present in the projects.
    pub fn filters(&self) -> Vec<String> {
        gallery::category_filters(self.projects.iter().map(|p| p.category.as_str()))
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn select(&mut self, filter: &str) {
        filter.clone_into(&mut self.selected);
    }

    /// Projects shown under the selected filter, in display order.
    pub fn visible(&self) -> Vec<&Project> {
        gallery::filter_by_category(&self.projects, &self.selected, |p| p.category.as_str())
    }
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

const PLACEHOLDER_IMAGE: &str =
    "https://images.pexels.com/photos/1194420/pexels-photo-1194420.jpeg?auto=compress&cs=tinysrgb&w=1200";

/// Slide shown when there are no projects to rotate.
pub fn placeholder_project() -> Project {
    Project {
        id: 0,
        title: "Proyecto Ejemplo".into(),
        description: "Grabado láser en cuero".into(),
        image_url: PLACEHOLDER_IMAGE.into(),
        category: "cuero".into(),
        order_index: 0,
        created_at: Timestamp::default(),
        updated_at: Timestamp::default(),
    }
}

/// Hero carousel over the first projects. Never empty.
#[derive(Debug, Clone)]
pub struct HeroView {
    slides: Vec<Project>,
    rotator: HeroRotator,
}

impl HeroView {
    /// Fetch the first [`HERO_PROJECT_LIMIT`] projects; an empty result or
    /// a failed fetch shows the placeholder.
    pub async fn load(gateway: &dyn Gateway) -> Self {
        let projects = match gateway
            .list_projects(ListQuery::first(HERO_PROJECT_LIMIT))
            .await
        {
            Ok(projects) => projects,
            Err(err) => {
                tracing::error!(error = %err, "Failed to load hero projects");
                Vec::new()
            }
        };
        Self::from_projects(projects)
    }

    pub fn from_projects(projects: Vec<Project>) -> Self {
        let slides = if projects.is_empty() {
            vec![placeholder_project()]
        } else {
            projects
        };
        Self {
            rotator: HeroRotator::new(slides.len()),
            slides,
        }
    }

    pub fn slides(&self) -> &[Project] {
        &self.slides
    }

    pub fn index(&self) -> usize {
        self.rotator.index()
    }

    pub fn current(&self) -> &Project {
        &self.slides[self.rotator.index()]
    }

    /// Timer advance.
    pub fn tick(&mut self) {
        self.rotator.tick();
    }

    pub fn next(&mut self, now: Instant) -> bool {
        self.rotator.next(now)
    }

    pub fn prev(&mut self, now: Instant) -> bool {
        self.rotator.prev(now)
    }
}

/// A mounted hero: loads its slides, then advances them every
/// [`AUTO_ADVANCE_INTERVAL`] until unmounted or dropped.
pub struct HeroMount {
    view: Arc<Mutex<HeroView>>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl HeroMount {
    pub fn mount(gateway: Arc<dyn Gateway>) -> Self {
        let view = Arc::new(Mutex::new(HeroView::from_projects(Vec::new())));
        let cancel = CancellationToken::new();
        let task = tokio::spawn(run_hero(gateway, Arc::clone(&view), cancel.clone()));
        Self {
            view,
            cancel,
            task: Some(task),
        }
    }

    /// Snapshot of the carousel.
    pub fn view(&self) -> HeroView {
        self.lock().clone()
    }

    /// Manual moves read the tokio clock, the same one that drives the
    /// auto-advance, so a paused runtime also pauses the transition lock.
    pub fn next(&self) -> bool {
        self.lock().next(tokio::time::Instant::now().into_std())
    }

    pub fn prev(&self) -> bool {
        self.lock().prev(tokio::time::Instant::now().into_std())
    }

    pub async fn unmount(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                tracing::warn!(error = %err, "Hero mount task failed");
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, HeroView> {
        self.view.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for HeroMount {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run_hero(
    gateway: Arc<dyn Gateway>,
    view: Arc<Mutex<HeroView>>,
    cancel: CancellationToken,
) {
    let loaded = tokio::select! {
        () = cancel.cancelled() => return,
        loaded = HeroView::load(gateway.as_ref()) => loaded,
    };
    *view.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = loaded;

    let mut interval = tokio::time::interval(AUTO_ADVANCE_INTERVAL);
    // The first tick completes immediately.
    interval.tick().await;

    loop {
        tokio::select! {
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                view.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).tick();
            }
        }
    }
}
