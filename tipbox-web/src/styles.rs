// Stylesheets injected by the sandbox at mount.

/// Overlay enter/exit animation classes used by the tooltip widget.
pub const TOOLTIP_CSS: &str = "\
.tooltip-fade{opacity:1;transition:opacity 0.2s ease-in-out}\
.tooltip-slide{opacity:1;transform:translateX(-50%) translateY(-100%) translateY(0);transition:all 0.2s ease-in-out}\
.tooltip-scale{opacity:1;transform:translateX(-50%) translateY(-100%) scale(1);transition:all 0.2s ease-in-out}";

/// Page layout, panels and light/dark color schemes.
pub const SANDBOX_CSS: &str = "\
.sandbox{min-height:100vh;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;transition:all 0.3s ease}\
.sandbox.light{background:linear-gradient(135deg,#667eea 0%,#764ba2 100%);color:#333}\
.sandbox.dark{background:linear-gradient(135deg,#2c3e50 0%,#34495e 100%);color:#fff}\
.header{display:flex;justify-content:space-between;align-items:center;padding:1rem 2rem;background:rgba(255,255,255,0.1);backdrop-filter:blur(10px);border-bottom:1px solid rgba(255,255,255,0.2)}\
.header h1{margin:0;font-size:1.8rem;font-weight:600}\
.theme-toggle,.copy-button{background:rgba(255,255,255,0.2);border:1px solid rgba(255,255,255,0.3);cursor:pointer;color:inherit;transition:all 0.2s ease}\
.theme-toggle{border-radius:8px;padding:8px}\
.theme-toggle:hover,.copy-button:hover{background:rgba(255,255,255,0.3);transform:translateY(-1px)}\
.main-container{display:grid;grid-template-columns:1fr 1fr;gap:2rem;padding:2rem;max-width:1400px;margin:0 auto}\
.controls-panel,.preview-panel{background:rgba(255,255,255,0.1);backdrop-filter:blur(10px);border-radius:16px;padding:1.5rem;border:1px solid rgba(255,255,255,0.2);box-shadow:0 8px 32px rgba(0,0,0,0.1)}\
.controls-panel h2,.preview-panel h2{margin-top:0;margin-bottom:1.5rem;font-size:1.3rem;font-weight:600}\
.control-group{margin-bottom:1.2rem}\
.control-group label{display:block;margin-bottom:0.5rem;font-weight:500;font-size:0.9rem}\
.control-group input,.control-group select,.control-group textarea{width:100%;padding:0.6rem;border:1px solid rgba(255,255,255,0.3);border-radius:6px;background:rgba(255,255,255,0.1);color:inherit;font-size:0.9rem}\
.control-group input:focus,.control-group select:focus,.control-group textarea:focus{outline:none;border-color:rgba(255,255,255,0.5);box-shadow:0 0 0 2px rgba(255,255,255,0.1)}\
.control-group input[type='range']{cursor:pointer}\
.control-group input[type='color']{height:40px;cursor:pointer}\
.preview-area{background:rgba(255,255,255,0.05);border-radius:12px;padding:3rem;text-align:center;margin-bottom:1.5rem;min-height:200px;display:flex;flex-direction:column;justify-content:center;align-items:center;gap:1rem}\
.preview-trigger{background:linear-gradient(45deg,#667eea,#764ba2);color:white;border:none;padding:12px 24px;border-radius:8px;font-size:1rem;font-weight:500;cursor:pointer;transition:all 0.2s ease;box-shadow:0 4px 12px rgba(0,0,0,0.2)}\
.preview-trigger:hover{transform:translateY(-2px);box-shadow:0 6px 16px rgba(0,0,0,0.3)}\
.preview-instructions{font-size:0.9rem;opacity:0.8;margin:0}\
.code-section{margin-top:1.5rem}\
.code-header{display:flex;justify-content:space-between;align-items:center;margin-bottom:1rem}\
.code-header h3{margin:0;font-size:1.1rem;font-weight:600}\
.copy-button{border-radius:6px;padding:6px 12px;font-size:0.85rem;display:flex;align-items:center;gap:6px}\
.code-block{background:rgba(0,0,0,0.2);border-radius:8px;padding:1rem;font-family:'Monaco','Menlo','Ubuntu Mono',monospace;font-size:0.8rem;line-height:1.4;overflow-x:auto;border:1px solid rgba(255,255,255,0.1)}\
.code-block code{color:inherit}\
@media (max-width:768px){.main-container{grid-template-columns:1fr;padding:1rem;gap:1rem}.header{padding:1rem}.header h1{font-size:1.4rem}.preview-area{padding:2rem 1rem}}";

/// Visible focus ring and screen-reader-only helper.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #00D9C0;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Every stylesheet the sandbox needs, in cascade order.
#[must_use]
pub fn stylesheet() -> String {
    [SANDBOX_CSS, TOOLTIP_CSS, visible_focus_css()].join("\n")
}
