//! The password-gated admin panel.
//!
//! The panel is reached through the site shell's Ctrl+Shift+A toggle.
//! Unlocking it loads projects, site config and categories, as the three
//! admin tabs need them. Content is only reachable while the session is
//! open.

use std::sync::Arc;

use nemitzam_core::error::CoreError;
use nemitzam_core::session::SessionGuard;
use nemitzam_core::shell::{KeyPress, SiteShell, View};
use nemitzam_core::site_config::SiteConfig;
use nemitzam_db::models::category::Category;
use nemitzam_db::models::project::Project;
use nemitzam_db::{Gateway, GatewayResult};

use crate::config_store::ConfigStore;
use crate::controller::ContentController;
use crate::error::StudioResult;
use crate::prompt::{self, Notice, Prompt};

/// Admin panel section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Projects,
    Config,
    Categories,
}

/// An entry in the project form's category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

pub struct AdminPanel {
    shell: SiteShell,
    session: SessionGuard,
    /// The login form's password field.
    password_input: String,
    prompt: Arc<dyn Prompt>,
    config_store: Arc<ConfigStore>,
    config_draft: SiteConfig,
    tab: Tab,
    projects: ContentController<Project>,
    categories: ContentController<Category>,
}

impl AdminPanel {
    pub fn new(
        gateway: Arc<dyn Gateway>,
        config_store: Arc<ConfigStore>,
        prompt: Arc<dyn Prompt>,
        session: SessionGuard,
    ) -> Self {
        Self {
            shell: SiteShell::default(),
            session,
            password_input: String::new(),
            projects: ContentController::new(Arc::clone(&gateway), Arc::clone(&prompt)),
            categories: ContentController::new(gateway, Arc::clone(&prompt)),
            prompt,
            config_store,
            config_draft: SiteConfig::default(),
            tab: Tab::default(),
        }
    }

    /// Which top-level view the shell shows.
    pub fn view(&self) -> View {
        self.shell.view()
    }

    /// Feed a key press to the shell. Returns whether it toggled the view.
    pub fn handle_key(&mut self, press: KeyPress) -> bool {
        let toggled = self.shell.handle_key(press);
        if toggled {
            tracing::debug!(view = ?self.shell.view(), "Shell view toggled");
        }
        toggled
    }

    /// Back to the public site. The session stays open.
    pub fn show_site(&mut self) {
        self.shell.show_site();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn password_input(&self) -> &str {
        &self.password_input
    }

    pub fn set_password_input(&mut self, value: impl Into<String>) {
        self.password_input = value.into();
    }

    /// Submit the login form. The field is emptied whatever the outcome.
    pub async fn submit_password(&mut self) -> bool {
        let candidate = std::mem::take(&mut self.password_input);
        self.login(&candidate).await
    }

    /// Try to open the session with `candidate`. On success every tab's
    /// data is loaded; load failures are logged and leave that tab empty.
    pub async fn login(&mut self, candidate: &str) -> bool {
        if !self.session.authenticate(candidate) {
            tracing::debug!("Admin login rejected");
            self.prompt.notify(Notice::error(prompt::WRONG_PASSWORD));
            return false;
        }

        tracing::info!("Admin session opened");
        let _ = self.projects.refresh().await;
        let _ = self.load_config().await;
        let _ = self.categories.refresh().await;
        true
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.tab = Tab::default();
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn projects(&self) -> Result<&ContentController<Project>, CoreError> {
        self.ensure_open()?;
        Ok(&self.projects)
    }

    pub fn projects_mut(&mut self) -> Result<&mut ContentController<Project>, CoreError> {
        self.ensure_open()?;
        Ok(&mut self.projects)
    }

    pub fn categories(&self) -> Result<&ContentController<Category>, CoreError> {
        self.ensure_open()?;
        Ok(&self.categories)
    }

    pub fn categories_mut(&mut self) -> Result<&mut ContentController<Category>, CoreError> {
        self.ensure_open()?;
        Ok(&mut self.categories)
    }

    /// The config form.
    pub fn config_draft(&self) -> &SiteConfig {
        &self.config_draft
    }

    pub fn config_draft_mut(&mut self) -> &mut SiteConfig {
        &mut self.config_draft
    }

    /// Reload the config form from the store.
    pub async fn load_config(&mut self) -> GatewayResult<()> {
        self.config_draft = self.config_store.load().await?;
        Ok(())
    }

    /// Save the config form and broadcast it to every mounted view.
    pub async fn save_config(&mut self) -> StudioResult<()> {
        self.ensure_open()?;
        match self.config_store.save(&self.config_draft).await {
            Ok(()) => {
                self.prompt.notify(Notice::success(prompt::CONFIG_SAVED));
                Ok(())
            }
            Err(err) => {
                self.prompt
                    .notify(Notice::failure(prompt::CONFIG_SAVE_ACTION, &err.source));
                Err(err.into())
            }
        }
    }

    /// Selector entries for the project form, one per listed category.
    ///
    /// A project whose slug matches none of these shows no selection.
    pub fn category_options(&self) -> Vec<CategoryOption> {
        self.categories
            .items()
            .iter()
            .map(|c| CategoryOption {
                value: c.slug.clone(),
                label: c.name.clone(),
            })
            .collect()
    }

    fn ensure_open(&self) -> Result<(), CoreError> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(CoreError::Unauthorized("Admin session is not open".into()))
        }
    }
}
