use soroban_sdk::contracttype;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Notification {
    SwitchNetwork,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::SwitchNetwork => "Please switch to the supported network.",
        }
    }
}
