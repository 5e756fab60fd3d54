//! Session state management
//!
//! The [`SessionController`] lives in a local (non-`Send`) stored value; the
//! page renders from an `RwSignal<Session>` kept in sync through
//! [`SessionController::subscribe`].

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::{PortalConfig, Session, SessionController, SessionPhase};
use lib_solana::{GifProgramClient, ProgramConfig};

use crate::services::{BrowserPrompt, GlooTransport, PhantomWallet};
use crate::utils::constants::{BASE_ACCOUNT_KEYPAIR_JSON, CLUSTER, IDL_JSON};

pub type PortalController = SessionController<
    PhantomWallet,
    GifProgramClient<GlooTransport, PhantomWallet>,
    BrowserPrompt,
>;

/// Assemble the controller from the bundled IDL and keypair.
pub fn build_controller() -> lib_core::Result<PortalController> {
    let program_config = ProgramConfig::from_bundle(IDL_JSON, BASE_ACCOUNT_KEYPAIR_JSON, CLUSTER)?;

    let portal_config =
        PortalConfig::new(program_config.base_account_address()).with_cluster(CLUSTER);
    portal_config.validate()?;

    let program = GifProgramClient::new(program_config, GlooTransport, PhantomWallet);
    Ok(SessionController::new(
        portal_config,
        PhantomWallet,
        program,
        BrowserPrompt,
    ))
}

/// Global session context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Session>,
    controller: StoredValue<Rc<PortalController>, LocalStorage>,
}

impl SessionContext {
    pub fn new(controller: PortalController) -> Self {
        let session = RwSignal::new(controller.session());
        controller.subscribe(move |snapshot| session.set(snapshot.clone()));

        Self {
            session,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    pub fn explorer_link(&self, address: &str) -> String {
        self.controller
            .with_value(|c| c.config().explorer_link(address))
    }

    pub fn set_input(&self, value: String) {
        self.controller.with_value(|c| c.set_input(value));
    }

    pub fn check_existing_session(&self) {
        self.run("check_existing_session", |c| async move {
            c.check_existing_session().await
        });
    }

    pub fn connect(&self) {
        self.run("connect", |c| async move { c.connect().await });
    }

    pub fn submit(&self) {
        self.run("submit_input", |c| async move { c.submit_input().await });
    }

    pub fn initialize_account(&self) {
        self.run("initialize_account", |c| async move {
            c.initialize_account().await
        });
    }

    pub fn refresh(&self) {
        self.run("refresh", |c| async move { c.refresh().await });
    }

    fn run<F, Fut>(&self, name: &'static str, op: F)
    where
        F: FnOnce(Rc<PortalController>) -> Fut + 'static,
        Fut: Future<Output = SessionPhase> + 'static,
    {
        let controller = self.controller.get_value();
        spawn_local(async move {
            let phase = op(controller).await;
            log::debug!("{} finished in phase {:?}", name, phase);
        });
    }
}

pub fn provide_session_context(controller: PortalController) -> SessionContext {
    let context = SessionContext::new(controller);
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
