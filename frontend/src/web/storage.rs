//! 会话持久化封装模块
//!
//! LocalStorage 中只保存两项：不透明的 Bearer 令牌字符串和
//! 序列化的用户快照。两者必须同生共死：任何认证失败路径
//! 都通过 `clear()` 一并清除。

use footperf_shared::{STORAGE_TOKEN_KEY, STORAGE_USER_KEY, User};
use gloo_storage::{LocalStorage, Storage};

/// 持久化会话的读写封装
pub struct SessionStore;

impl SessionStore {
    /// 持久化的 Bearer 令牌（原样字符串，不做 JSON 包装）
    pub fn token() -> Option<String> {
        LocalStorage::raw().get_item(STORAGE_TOKEN_KEY).ok().flatten()
    }

    pub fn set_token(token: &str) {
        let _ = LocalStorage::raw().set_item(STORAGE_TOKEN_KEY, token);
    }

    /// 持久化的用户快照
    pub fn user() -> Option<User> {
        LocalStorage::get(STORAGE_USER_KEY).ok()
    }

    pub fn set_user(user: &User) {
        let _ = LocalStorage::set(STORAGE_USER_KEY, user);
    }

    /// 同时清除令牌与用户快照
    pub fn clear() {
        LocalStorage::delete(STORAGE_TOKEN_KEY);
        LocalStorage::delete(STORAGE_USER_KEY);
    }
}
