pub mod board_config;
pub mod board_props;
pub mod board_view;
pub mod dialog_state;
pub mod error;
pub mod liquidation;
pub mod notification;
pub mod position_values;
pub mod read_error;
pub mod wallet;
