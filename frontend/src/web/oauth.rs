//! OAuth 弹窗流程模块
//!
//! 打开 Google OAuth 弹窗并订阅跨窗口 `message` 事件。
//! 监听器的生命周期与一次流程绑定：收到令牌后立即解除注册，
//! 宿主视图卸载时由持有的 `OauthListener` 在 Drop 中解除。

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

type MessageClosure = Closure<dyn FnMut(web_sys::MessageEvent)>;

/// 一次 OAuth 流程的消息订阅
///
/// 持有者 Drop 时监听器被解除并释放。
pub struct OauthListener {
    handle: Rc<RefCell<Option<MessageClosure>>>,
}

impl OauthListener {
    /// 解除 `message` 事件监听（可安全地重复调用）
    fn detach(handle: &Rc<RefCell<Option<MessageClosure>>>) {
        if let Some(closure) = handle.borrow().as_ref() {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "message",
                    closure.as_ref().unchecked_ref(),
                );
            }
            web_sys::console::log_1(&"[OAuth] Message listener detached.".into());
        }
    }
}

impl Drop for OauthListener {
    fn drop(&mut self) {
        Self::detach(&self.handle);
        self.handle.borrow_mut().take();
    }
}

/// 打开 Google OAuth 弹窗并开始监听完成消息
///
/// 弹窗由认证服务托管；完成时它向 opener `postMessage` 一个
/// `{ token }` 对象然后自行关闭。本函数不阻塞。
pub fn begin_google_login(on_token: impl Fn(String) + 'static) -> Option<OauthListener> {
    let window = web_sys::window()?;
    let url = crate::api::auth::google_auth_url();

    window
        .open_with_url_and_target_and_features(&url, "google_auth", "width=500,height=600")
        .ok()?;

    let handle: Rc<RefCell<Option<MessageClosure>>> = Rc::new(RefCell::new(None));
    let closure = Closure::new({
        let handle = Rc::clone(&handle);
        move |event: web_sys::MessageEvent| {
            let data = event.data();
            let token = js_sys::Reflect::get(&data, &JsValue::from_str("token"))
                .ok()
                .and_then(|value| value.as_string());

            if let Some(token) = token {
                // 流程结束：先解除监听（闭包自身稍后随 OauthListener 释放）
                OauthListener::detach(&handle);
                on_token(token);
            }
        }
    });

    window
        .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        .ok()?;
    *handle.borrow_mut() = Some(closure);

    Some(OauthListener { handle })
}
