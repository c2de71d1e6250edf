pub mod change_password;
pub mod delete_account;
pub mod list_accounts;
pub mod login;
pub mod signup;
pub mod update_settings;

pub use change_password::{ChangePasswordError, ChangePasswordUseCase};
pub use delete_account::{DeleteAccountError, DeleteAccountUseCase};
pub use list_accounts::{ListAccountsError, ListAccountsUseCase};
pub use login::{LoginError, LoginResponse, LoginUseCase};
pub use signup::{SignupError, SignupUseCase};
pub use update_settings::{UpdateSettingsError, UpdateSettingsUseCase};
