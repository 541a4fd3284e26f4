//! Static assets inlined into the generated page.

pub const STYLE: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; line-height: 1.6; color: #24292f; }
.top-bar { position: fixed; top: 0; left: 0; right: 0; height: 48px; display: flex; align-items: center; gap: 12px; padding: 0 16px; background: #24292f; color: #fff; z-index: 10; }
.top-bar-title { flex: 1; font-weight: 600; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.top-bar button { border: 0; border-radius: 4px; padding: 4px 10px; cursor: pointer; }
.outline { position: fixed; top: 48px; bottom: 0; left: 0; width: 320px; overflow-y: auto; padding: 12px; background: #f6f8fa; border-right: 1px solid #d0d7de; font-size: 14px; }
.outline.hidden { display: none; }
.outline-section-title { margin: 12px 0 4px; font-size: 12px; text-transform: uppercase; color: #57606a; }
.outline-list, .outline-children { list-style: none; }
.outline-children { padding-left: 12px; }
.outline-link { display: block; padding: 2px 4px; color: inherit; text-decoration: none; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.outline-link:hover { background: #eaeef2; }
.outline-row { display: flex; align-items: center; }
.outline-item:not(.has-children) > .outline-row { padding-left: 16px; }
.toggle-btn { width: 16px; flex: none; cursor: pointer; font-size: 10px; color: #57606a; transition: transform 0.15s; }
.outline-item.collapsed > .outline-children { display: none; }
.outline-item.collapsed > .outline-row > .toggle-btn { transform: rotate(-90deg); }
.log-item.superseded .log-title { text-decoration: line-through; opacity: 0.6; }
.log-id { font-family: monospace; color: #57606a; }
.badge { display: inline-block; padding: 0 6px; border-radius: 3px; font-size: 11px; font-weight: 600; background: #8c959f; color: #fff; }
.badge-DECISION { background: #4CAF50; }
.badge-EXEC { background: #2196F3; }
.badge-DISCOVERY { background: #9C27B0; }
.badge-VISION { background: #FF9800; }
.badge-MILESTONE { background: #E91E63; }
.badge-PLAN { background: #00BCD4; }
.badge-TOOLING { background: #795548; }
.badge-ARCHITECTURE { background: #607D8B; }
.badge-DESIGN { background: #3F51B5; }
.content { margin: 48px 0 0 320px; padding: 24px 32px; max-width: 960px; }
.content.full-width { margin-left: 0; }
.content h1, .content h2, .content h3, .content h4, .content h5 { margin: 16px 0 8px; scroll-margin-top: 56px; }
.content p { margin: 4px 0; scroll-margin-top: 56px; }
.content pre { background: #f6f8fa; padding: 12px; overflow-x: auto; border-radius: 6px; }
.content code { font-family: monospace; font-size: 90%; }
.content table { border-collapse: collapse; margin: 8px 0; }
.content th, .content td { border: 1px solid #d0d7de; padding: 4px 10px; }
.page-footer { margin-left: 320px; padding: 16px 32px; color: #57606a; font-size: 12px; }
@media (max-width: 767px) {
  .outline { display: none; width: 100%; }
  .outline.open { display: block; }
  .content, .page-footer { margin-left: 0; }
}
"#;

pub const SCRIPT: &str = r#"
const outline = document.getElementById('outline');
const content = document.getElementById('content');
function toggleOutline() {
  if (window.innerWidth >= 768) {
    outline.classList.toggle('hidden');
    content.classList.toggle('full-width');
  } else {
    outline.classList.toggle('open');
  }
}
function jumpTo(id) {
  const target = document.getElementById(id);
  if (target) target.scrollIntoView({ behavior: 'smooth' });
}
// Collapsing an item also collapses everything below it
document.querySelectorAll('.toggle-btn').forEach(btn => {
  btn.addEventListener('click', e => {
    e.stopPropagation();
    const item = btn.closest('.outline-item');
    if (item.classList.toggle('collapsed')) {
      item.querySelectorAll('.outline-item.has-children').forEach(child => child.classList.add('collapsed'));
    }
  });
});
document.querySelectorAll('.outline-link').forEach(link => {
  link.addEventListener('click', () => {
    if (window.innerWidth < 768) outline.classList.remove('open');
  });
});
"#;
