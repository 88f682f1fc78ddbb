#![deny(warnings)]
#![no_std]

use common::FixedI128;
use pool_interface::types::user_info::UserInfo;
use soroban_sdk::{log, symbol_short, Env, Vec};

use crate::methods::accumulate::accumulate;
use crate::methods::eligibility::eligible_liquidations;
use crate::methods::pagination::{should_advance, INITIAL_PAGE};
use crate::methods::view::rows;
use crate::types::board_config::BoardConfig;
use crate::types::board_props::BoardProps;
use crate::types::board_view::{BoardView, BOARD_COLUMNS, BOARD_TITLE};
use crate::types::dialog_state::DialogState;
use crate::types::error::Error;
use crate::types::liquidation::Liquidation;
use crate::types::notification::Notification;
use crate::types::wallet::Wallet;

pub use crate::source::PoolSource;

pub mod methods;
mod source;
#[cfg(test)]
mod tests;
pub mod types;

/// Liquidations board of the dashboard.
///
/// Each `poll` re-reads the pool at the current page cursor, the way a live
/// contract read refreshes on every new ledger. The cursor moves forward while
/// the member count says more pages exist.
pub struct Board<S: PoolSource> {
    env: Env,
    source: S,
    wallet: Wallet,
    config: BoardConfig,
    props: BoardProps,
    current_page: u32,
    liquidation_threshold: u32,
    member_number: u32,
    last_page: Option<Vec<UserInfo>>,
    liquidations: Vec<Liquidation>,
    dialog: DialogState,
    notifications: Vec<Notification>,
}

impl<S: PoolSource> Board<S> {
    pub fn new(
        env: &Env,
        source: S,
        wallet: Wallet,
        config: BoardConfig,
        props: BoardProps,
    ) -> Self {
        Self {
            env: env.clone(),
            source,
            wallet,
            config,
            props,
            current_page: INITIAL_PAGE,
            liquidation_threshold: 0,
            member_number: 0,
            last_page: None,
            liquidations: Vec::new(env),
            dialog: DialogState::default(),
            notifications: Vec::new(env),
        }
    }

    /// Runs one read cycle. Returns true when the page cursor moved forward.
    pub fn poll(&mut self) -> bool {
        let env = &self.env;

        self.liquidation_threshold = self.source.liquidation_threshold().unwrap_or_else(|err| {
            err.log(env, symbol_short!("threshold"));
            0
        });
        self.member_number = self.source.member_number().unwrap_or_else(|err| {
            err.log(env, symbol_short!("members"));
            0
        });

        let page = self.current_page;
        let mut advanced = false;

        match self.source.list_user_info(page) {
            Ok(users) => {
                if self.last_page.as_ref() != Some(&users) {
                    self.apply_page(page, &users);
                    self.last_page = Some(users);
                }

                if should_advance(self.member_number, page) {
                    if let Some(next_page) = page.checked_add(1) {
                        log!(&self.env, "page cursor advanced", next_page);
                        self.current_page = next_page;
                        self.last_page = None;
                        advanced = true;
                    }
                }
            }
            Err(err) => err.log(&self.env, symbol_short!("page")),
        }

        if self.member_number == 0 {
            self.liquidations = Vec::new(&self.env);
        }

        advanced
    }

    /// Polls until the page cursor stops moving
    pub fn load(&mut self) {
        while self.poll() {}
    }

    pub fn liquidations(&self) -> Vec<Liquidation> {
        self.liquidations.clone()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn liquidation_threshold(&self) -> u32 {
        self.liquidation_threshold
    }

    pub fn member_number(&self) -> u32 {
        self.member_number
    }

    pub fn view(&self) -> BoardView {
        BoardView {
            title: BOARD_TITLE,
            columns: BOARD_COLUMNS,
            rows: rows(&self.env, &self.liquidations, &self.props, &self.config),
            dialog: self.dialog.clone(),
            native_price_usd: self.props.native_price_usd,
            stable_price_usd: self.props.stable_price_usd,
        }
    }

    /// Selects `liquidation` and shows the liquidate dialog.
    /// Fails with `NetworkMismatch` and queues a switch-network warning
    /// when the wallet is not on the required network.
    pub fn open_liquidate_dialog(&mut self, liquidation: Liquidation) -> Result<(), Error> {
        if !self.wallet.is_on_network(&self.config.required_network_id) {
            log!(&self.env, "liquidate dialog blocked, wrong network");
            self.notifications.push_back(Notification::SwitchNetwork);
            return Err(Error::NetworkMismatch);
        }

        self.dialog.open(liquidation);

        Ok(())
    }

    /// Opens the dialog for the row at `index`
    pub fn open_liquidate_dialog_at(&mut self, index: u32) -> Result<(), Error> {
        let liquidation = self.liquidations.get(index).ok_or(Error::NoSelection)?;
        self.open_liquidate_dialog(liquidation)
    }

    pub fn close_liquidate_dialog(&mut self) {
        self.dialog.close();
    }

    pub fn set_dialog_visible(&mut self, visible: bool) {
        self.dialog.set_visible(visible);
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    /// Drains queued user-facing warnings
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        let notifications = self.notifications.clone();
        self.notifications = Vec::new(&self.env);
        notifications
    }

    pub fn set_wallet(&mut self, wallet: Wallet) {
        self.wallet = wallet;
    }

    pub fn set_props(&mut self, props: BoardProps) {
        self.props = props;
    }

    pub fn set_prices(&mut self, native_price_usd: FixedI128, stable_price_usd: FixedI128) {
        self.props.native_price_usd = native_price_usd;
        self.props.stable_price_usd = stable_price_usd;
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        self.props.user_info.as_ref()
    }

    fn apply_page(&mut self, page: u32, users: &Vec<UserInfo>) {
        let found = eligible_liquidations(
            &self.env,
            users,
            self.wallet.address.as_ref(),
            self.liquidation_threshold,
            &self.props,
            &self.config,
        );

        match found {
            Ok(found) => accumulate(&mut self.liquidations, found, page),
            Err(err) => {
                log!(&self.env, "page not applied", page, err as u32);
            }
        }
    }
}
