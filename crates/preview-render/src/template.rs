//! Static document shell. Slots are `__NAME__` tokens filled by [`fill`].

/// Replace every slot token in `template` with its value in one left-to-right
/// pass. Inserted values are never scanned for further tokens.
pub fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;
    while let Some((pos, key, value)) = slots
        .iter()
        .filter_map(|(key, value)| rest.find(key).map(|pos| (pos, *key, *value)))
        .min_by_key(|(pos, _, _)| *pos)
    {
        out.push_str(&rest[..pos]);
        out.push_str(value);
        rest = &rest[pos + key.len()..];
    }
    out.push_str(rest);
    out
}

pub const DOCUMENT: &str = r##"<!DOCTYPE html>
<html lang="__LANG__">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>__SYSTEM_NAME__ - __TITLE_SUFFIX__</title>
  <style>
__STYLES__
  </style>
</head>
<body>
  <aside class="sidebar">
    <div class="brand">
      <h1>__SYSTEM_NAME__</h1>
      <p class="version">v__VERSION__</p>
    </div>
    <nav><a href="#" class="nav-item active">Dashboard</a></nav>
  </aside>
  <div class="main-content">
    <header class="topbar">
      <h2>Dashboard</h2>
      <div class="status status-__STATUS_CLASS__" title="__STATUS_MESSAGE__">
        <span class="status-dot"></span>
        <span class="status-label">__STATUS_LABEL__</span>
      </div>
    </header>
    <main class="content">
__ONE_THING__
      <section class="signals">
__SIGNALS__
      </section>
      <div class="lower-grid">
        <section class="card history">
          <h3><span>📜</span> Recent activity</h3>
          <div class="history-rows">
__HISTORY__
          </div>
        </section>
        <section class="card reasoning">
          <h3><span>💡</span> Decision basis</h3>
          <p class="reasoning-note">Everything the operator needs to act on is reflected at the <strong>top</strong> of this page.</p>
          <div class="reasoning-sections">
__REASONING__
          </div>
        </section>
      </div>
__TIMELINE__
    </main>
    <footer class="seal">
      <p>This preview is the confirmed screen design for <strong>__TITLE_SUFFIX__</strong> and serves as the basis for build-out and pricing.</p>
    </footer>
  </div>
  <button class="audit-toggle" id="auditToggleBtn" type="button" onclick="toggleAuditPanel()">🧠 Developer Mode</button>
__AUDIT_PANEL__
  <script>
    function toggleAuditPanel() {
      document.getElementById('auditPanel').classList.toggle('visible');
    }
    if (new URLSearchParams(window.location.search).get(__DEV_QUERY_KEY__) === 'true') {
      document.getElementById('auditPanel').classList.add('visible');
    }
    document.addEventListener('keydown', (e) => {
      if ((e.metaKey || e.ctrlKey) && e.shiftKey && (e.key === 'J' || e.key === 'j')) {
        toggleAuditPanel();
        e.preventDefault();
      }
    });
__TIMELINE_SCRIPT__
  </script>
</body>
</html>
"##;

pub const STYLES: &str = r#"    * { box-sizing: border-box; margin: 0; padding: 0; font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; }
    body { display: flex; background: #F5F7FA; color: #111827; overflow: hidden; }
    .card { background: #fff; border-radius: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.06); padding: 16px; }
    .card h3 { font-size: 14px; font-weight: 700; margin-bottom: 12px; display: flex; gap: 8px; align-items: center; }
    .sidebar { width: 220px; height: 100vh; padding: 20px; background: #fff; border-right: 1px solid #E5E7EB; }
    .brand h1 { font-size: 20px; font-weight: 700; }
    .brand .version { font-size: 10px; color: #6B7280; margin-top: 2px; }
    .sidebar nav { margin-top: 24px; }
    .nav-item { display: block; padding: 8px 12px; border-radius: 8px; color: #111827; text-decoration: none; font-size: 14px; font-weight: 500; }
    .nav-item.active { background: #F3F4F6; }
    .main-content { flex: 1; height: 100vh; overflow-y: auto; }
    .topbar { position: sticky; top: 0; z-index: 10; display: flex; align-items: center; gap: 12px; padding: 12px 24px; background: #fff; border-bottom: 1px solid #E5E7EB; }
    .topbar h2 { font-size: 20px; font-weight: 700; }
    .status { display: flex; align-items: center; gap: 6px; font-size: 12px; color: #4B5563; }
    .status-dot { width: 8px; height: 8px; border-radius: 50%; }
    .status-ok .status-dot { background: #10B981; }
    .status-warning .status-dot { background: #F59E0B; }
    .content { padding: 24px; }
    .one-thing { display: flex; align-items: center; justify-content: space-between; margin-bottom: 20px; padding: 20px; background: #FFF9E5; }
    .one-thing-main { display: flex; align-items: center; gap: 12px; }
    .one-thing-icon { width: 48px; height: 48px; display: flex; align-items: center; justify-content: center; font-size: 24px; border-radius: 12px; background: #FDE68A; }
    .eyebrow { font-size: 10px; font-weight: 600; letter-spacing: 0.05em; text-transform: uppercase; color: #B45309; }
    .one-thing h3 { font-size: 18px; font-weight: 700; margin: 0; }
    .one-thing button { padding: 8px 20px; border: none; border-radius: 999px; background: #FBBF24; font-size: 12px; font-weight: 600; cursor: pointer; }
    .signals { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin-bottom: 20px; }
    .signal-head { display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px; }
    .signal-icon { width: 40px; height: 40px; display: flex; align-items: center; justify-content: center; font-size: 18px; border-radius: 8px; }
    .signal-label { font-size: 10px; font-weight: 600; text-transform: uppercase; color: #6B7280; }
    .signal h4 { font-size: 14px; font-weight: 700; margin-bottom: 4px; }
    .signal-value { font-size: 30px; font-weight: 700; margin-bottom: 8px; }
    .progress { height: 6px; border-radius: 999px; overflow: hidden; background: #F3F4F6; margin-bottom: 8px; }
    .progress-fill { height: 100%; }
    .signal-description { font-size: 10px; color: #4B5563; }
    .sev-normal .signal-icon, .pill.sev-normal { background: #D1FAE5; color: #047857; }
    .sev-warning .signal-icon, .pill.sev-warning { background: #FEF3C7; color: #B45309; }
    .sev-danger .signal-icon, .pill.sev-danger { background: #FEE2E2; color: #B91C1C; }
    .sev-normal .progress-fill { background: #10B981; }
    .sev-warning .progress-fill { background: #F59E0B; }
    .sev-danger .progress-fill { background: #EF4444; }
    .lower-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 16px; }
    .history-row { display: flex; align-items: center; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #F9FAFB; }
    .history-row:last-child { border-bottom: none; }
    .history-time { width: 48px; display: inline-block; font-family: monospace; font-size: 10px; color: #6B7280; }
    .history-title { font-size: 12px; font-weight: 500; }
    .pill { display: inline-flex; align-items: center; gap: 4px; padding: 2px 8px; border-radius: 999px; font-size: 10px; font-weight: 600; }
    .reasoning-note { margin-bottom: 12px; padding: 12px; border-radius: 8px; background: #EFF6FF; color: #1E3A8A; font-size: 10px; line-height: 1.6; }
    .reasoning-section { margin-bottom: 12px; }
    .reasoning-section h4 { display: flex; align-items: center; gap: 6px; font-size: 11px; font-weight: 600; margin-bottom: 4px; }
    .stage-dot { width: 6px; height: 6px; border-radius: 50%; }
    .reasoning-section ul { list-style: none; margin-left: 12px; font-size: 10px; color: #4B5563; }
    .timeline { margin-top: 20px; }
    .event-card { margin-bottom: 12px; border-left: 4px solid #E5E7EB; transition: box-shadow 0.2s, border-color 0.2s; }
    .event-card.active { border-left-color: #3B82F6; box-shadow: 0 4px 12px rgba(59,130,246,0.25); }
    .event-card.done { opacity: 0.6; }
    .event-card.safety-event { border-left-color: #EF4444; }
    .event-card.human-gate { border-left-color: #F59E0B; }
    .card-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px; }
    .event-number { color: #9CA3AF; margin-right: 6px; }
    .badge { padding: 2px 8px; border-radius: 10px; font-size: 10px; font-weight: 600; margin-left: 4px; }
    .badge-stage { background: #E5E7EB; color: #374151; }
    .badge-danger { background: #FEE2E2; color: #B91C1C; }
    .badge-warning { background: #FEF3C7; color: #B45309; }
    .description { font-size: 12px; color: #4B5563; margin-bottom: 8px; }
    .event-meta { display: flex; flex-wrap: wrap; gap: 12px; font-size: 11px; color: #6B7280; margin-bottom: 8px; }
    .btn { padding: 6px 14px; border: none; border-radius: 8px; background: #1F2937; color: #fff; font-size: 12px; cursor: pointer; }
    .progress-log { margin-top: 12px; font-family: monospace; font-size: 11px; color: #374151; list-style: none; }
    .seal { margin-top: 24px; padding: 16px; text-align: center; font-size: 10px; color: #4B5563; background: #fff; border-top: 1px solid #E5E7EB; }
    .audit-toggle { position: fixed; bottom: 20px; right: 20px; z-index: 1002; padding: 10px 18px; border: none; border-radius: 25px; background: #1F2937; color: #fff; font-size: 0.8em; font-weight: 600; cursor: pointer; box-shadow: 0 4px 12px rgba(0,0,0,0.2); }
    .audit-toggle:hover { background: #374151; }
    .audit-panel { position: fixed; bottom: 60px; right: 20px; z-index: 999; display: none; width: 380px; max-height: 480px; overflow: hidden; background: #fff; border-radius: 12px; box-shadow: 0 10px 30px rgba(0,0,0,0.2); }
    .audit-panel.visible { display: block; }
    .audit-header { padding: 16px 20px; background: #1F2937; color: #fff; }
    .audit-header h3 { font-size: 1em; font-weight: 700; margin-bottom: 8px; }
    .audit-disclaimer { font-size: 0.75em; color: #D1D5DB; line-height: 1.4; }
    .audit-body { padding: 16px; max-height: 360px; overflow-y: auto; }
    .audit-section { margin-bottom: 16px; }
    .audit-section h4 { font-size: 0.9em; font-weight: 700; margin-bottom: 8px; padding-bottom: 4px; border-bottom: 1px solid #E5E7EB; }
    .audit-empty { font-size: 0.8em; font-style: italic; color: #9CA3AF; }
    .audit-item { margin-bottom: 8px; padding: 10px; border-radius: 8px; border-left: 3px solid #9CA3AF; background: #F9FAFB; }
    .audit-item-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 6px; }
    .audit-stage-badge { padding: 2px 8px; border-radius: 10px; background: #6B7280; color: #fff; font-size: 0.7em; font-weight: 600; }
    .audit-description { font-size: 0.8em; line-height: 1.5; color: #6B7280; margin-bottom: 6px; }
    .audit-meta { font-size: 0.75em; color: #6B7280; }"#;

pub const TIMELINE_SCRIPT: &str = r#"    let activeCard = 0;
    function highlightCard(index) {
      document.querySelectorAll('.event-card').forEach((card) => {
        card.classList.toggle('active', Number(card.dataset.index) === index);
      });
    }
    function processEvent(index) {
      const card = document.querySelector(`.event-card[data-index="${index}"]`);
      if (!card || card.classList.contains('done')) { return; }
      card.classList.add('done');
      const entry = document.createElement('li');
      const stamp = new Date().toLocaleTimeString();
      entry.textContent = `${stamp}  #${index + 1} ${card.querySelector('h3 .event-title').textContent}`;
      document.getElementById('progressLog').appendChild(entry);
      activeCard = index + 1;
      highlightCard(activeCard);
    }
    highlightCard(activeCard);"#;
