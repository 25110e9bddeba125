use wasm_bindgen::prelude::*;
use web_sys::js_sys::Function;

#[wasm_bindgen]
extern "C" {
    /// The object a browser wallet injects at `window.ethereum`.
    #[derive(Debug, Clone)]
    pub type EthereumProvider;

    #[wasm_bindgen(method, catch)]
    pub async fn request(this: &EthereumProvider, args: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method)]
    pub fn on(this: &EthereumProvider, event: &str, listener: &Function);

    #[wasm_bindgen(method, js_name = removeListener)]
    pub fn remove_listener(this: &EthereumProvider, event: &str, listener: &Function);

    #[wasm_bindgen(method, getter, js_name = isMetaMask)]
    pub fn is_metamask(this: &EthereumProvider) -> Option<bool>;
}
