//! Logged-in account kept in browser localStorage

use crate::models::Account;
use gloo_storage::{LocalStorage, Storage};

const ACCOUNT_KEY: &str = "zenhome_account";

pub fn store_account(account: &Account) {
    let _ = LocalStorage::set(ACCOUNT_KEY, account);
}

pub fn get_account() -> Option<Account> {
    LocalStorage::get(ACCOUNT_KEY).ok()
}

pub fn clear_account() {
    LocalStorage::delete(ACCOUNT_KEY);
}
