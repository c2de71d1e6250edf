mod health;
mod login;
mod signup;
mod update_settings;
