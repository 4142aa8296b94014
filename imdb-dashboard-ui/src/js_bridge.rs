//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart specs are Vega-Lite documents drawn by `vegaEmbed`. If the host page
//! does not load it, `init_charts` pulls the scripts from a CDN. The helpers
//! in `assets/js/vega-charts.js` are evaluated as globals (no ES modules) once
//! `vegaEmbed` is present.

use imdb_charts::ChartSpec;
use wasm_bindgen::JsValue;

/// Loaded in order when the host page does not provide `vegaEmbed` itself.
const VEGA_SCRIPTS: [&str; 3] = [
    "https://cdn.jsdelivr.net/npm/vega@5",
    "https://cdn.jsdelivr.net/npm/vega-lite@5",
    "https://cdn.jsdelivr.net/npm/vega-embed@6",
];

static VEGA_CHARTS_JS: &str = include_str!("../assets/js/vega-charts.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('IMDB JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("js_bridge: eval failed: {:?}", e);
        web_sys::console::warn_2(&JsValue::from_str("[IMDB] js_bridge eval failed:"), &e);
    }
}

/// Encode a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize chart scripts with a wait-for-vegaEmbed polling loop.
///
/// The helper functions are stored on `window`, evaluated at global scope via
/// indirect eval once `vegaEmbed` exists, and then promoted to `window.*`.
/// Safe to call more than once.
pub fn init_charts() {
    call_js(&format!(
        "if (!window.__imdbChartScripts && !window.__imdbChartsReady) {{ window.__imdbChartScripts = {}; }}",
        js_string(VEGA_CHARTS_JS)
    ));

    let init_js = r#"
        (function() {
            if (window.__imdbChartsReady || window.__imdbChartsPolling) { return; }
            window.__imdbChartsPolling = true;
            if (typeof vegaEmbed === 'undefined') {
                var urls = __VEGA_SCRIPTS__;
                (function next(i) {
                    if (i >= urls.length) { return; }
                    var tag = document.createElement('script');
                    tag.src = urls[i];
                    tag.onload = function() { next(i + 1); };
                    tag.onerror = function() { console.error('[IMDB] failed to load ' + urls[i]); };
                    document.head.appendChild(tag);
                })(0);
            }
            var waitForVega = setInterval(function() {
                if (typeof vegaEmbed !== 'undefined') {
                    clearInterval(waitForVega);
                    (0, eval)(window.__imdbChartScripts);
                    delete window.__imdbChartScripts;
                    if (typeof renderVegaChart !== 'undefined') window.renderVegaChart = renderVegaChart;
                    if (typeof destroyVegaChart !== 'undefined') window.destroyVegaChart = destroyVegaChart;
                    window.__imdbChartsReady = true;
                    console.log('IMDB charts initialized');
                }
            }, 100);
        })();
    "#;
    let scripts = serde_json::to_string(&VEGA_SCRIPTS).unwrap_or_else(|_| "[]".to_string());
    call_js(&init_js.replace("__VEGA_SCRIPTS__", &scripts));
}

/// JS statements that bump the render generation of a container and bind
/// `gens` and `gen` to the counters. `id` must already be a JS literal.
fn bump_generation(id: &str) -> String {
    format!(
        "var gens = window.__imdbChartGen = window.__imdbChartGen || {{}}; \
         var gen = gens[{id}] = (gens[{id}] || 0) + 1;"
    )
}

/// Script that renders `spec_json` into `container_id` once the helpers are
/// ready, unless a later render or destroy has been requested meanwhile.
fn render_script(container_id: &str, spec_json: &str) -> String {
    let id = js_string(container_id);
    let spec_literal = js_string(spec_json);
    let bump = bump_generation(&id);
    format!(
        r#"
        (function() {{
            {bump}
            var poll = setInterval(function() {{
                if (gens[{id}] !== gen) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__imdbChartsReady &&
                    typeof window.renderVegaChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderVegaChart({id}, {spec_literal}, gen);
                    }} catch(e) {{ console.error('[IMDB] renderVegaChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Script that clears `container_id` and invalidates any pending render.
fn destroy_script(container_id: &str) -> String {
    let id = js_string(container_id);
    let bump = bump_generation(&id);
    format!(
        "(function() {{ {bump} \
         if (typeof window.destroyVegaChart !== 'undefined') {{ window.destroyVegaChart({id}); }} \
         else {{ var el = document.getElementById({id}); if (el) el.innerHTML = ''; }} }})();"
    )
}

/// Render a chart spec into the container with the given DOM id.
///
/// Polls until the chart helpers are initialized and the container exists.
/// A later `render_chart` or `destroy_chart` for the same container cancels
/// the pending render.
pub fn render_chart(container_id: &str, spec: &ChartSpec) {
    let spec_json = match spec.to_json_string() {
        Ok(json) => json,
        Err(e) => {
            log::error!("js_bridge: failed to serialize {}: {}", container_id, e);
            return;
        }
    };
    call_js(&render_script(container_id, &spec_json));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id));
}
