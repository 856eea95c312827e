//! Global CSS for the studio site.
//!
//! Warm cabin palette, fixed nav with a scrolled state, the reveal
//! animation pair, mobile menu, form styles, and print rules.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* TIMBER (Brand, Headings) */
  --bark: #8B7355;
  --bark-deep: #6d5a43;

  /* MOSS (Accents, Links) */
  --moss: #6B8E23;
  --moss-deep: #55721c;

  /* PAPER (Backgrounds) */
  --cream: #faf6f0;
  --cream-shade: #f0e9dd;
  --linen-border: #e3dacb;

  /* TEXT */
  --charcoal: #2e2a26;
  --text-secondary: #5c554c;
  --text-muted: #8a8177;

  /* SEMANTIC */
  --success: #4a7a3a;
  --danger: #a23b2e;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 600ms cubic-bezier(0.4, 0, 0.2, 1);

  --nav-height: 72px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  scroll-behavior: smooth;
  scroll-padding-top: 80px; /* fixed nav clearance for #anchors */
}

body {
  font-family: var(--font-sans);
  background: var(--cream);
  color: var(--charcoal);
  line-height: 1.7;
  min-height: 100vh;
}

a {
  color: var(--moss-deep);
}

/* === Focus visibility === */
/* Outlines only for keyboard users; pointer use clears the class. */
.app-shell :focus {
  outline: none;
}

.app-shell.user-is-tabbing :focus {
  outline: 2px solid var(--moss);
  outline-offset: 2px;
}

/* === Skip link === */
.skip-link {
  position: absolute;
  top: -48px;
  left: 0;
  background: var(--charcoal);
  color: var(--cream);
  padding: 10px 16px;
  text-decoration: none;
  z-index: 10000;
  transition: top var(--transition-fast);
}

.skip-link:focus {
  top: 0;
}

/* === Navigation === */
.site-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--nav-height);
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
  z-index: 100;
}

.site-nav--scrolled {
  background: rgba(250, 246, 240, 0.96);
  box-shadow: 0 1px 0 var(--linen-border), 0 6px 18px rgba(46, 42, 38, 0.06);
}

.site-nav-inner {
  max-width: 1080px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  font-family: var(--font-serif);
  font-size: 1.35rem;
  color: var(--bark-deep);
  text-decoration: none;
  letter-spacing: 0.02em;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 1.75rem;
}

.nav-link {
  font-size: 0.95rem;
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link--active {
  color: var(--bark-deep);
}

.nav-cta {
  border: 1px solid var(--moss);
  color: var(--moss-deep);
  border-radius: 999px;
  padding: 0.4rem 1rem;
}

.nav-cta:hover {
  background: var(--moss);
  color: var(--cream);
}

/* Menu toggle, hidden on desktop */
.nav-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  padding: 8px;
  cursor: pointer;
  z-index: 120;
}

.nav-toggle-bar {
  width: 22px;
  height: 2px;
  background: var(--charcoal);
}

/* Overlay below the nav/panel; pointer-down here is "outside" */
.nav-overlay {
  position: fixed;
  inset: 0;
  z-index: 90;
  background: rgba(46, 42, 38, 0.2);
}

.nav-menu {
  position: fixed;
  top: var(--nav-height);
  left: 0;
  right: 0;
  z-index: 95;
  display: flex;
  flex-direction: column;
  background: var(--cream);
  border-bottom: 1px solid var(--linen-border);
  padding: 0.5rem 0 1rem;
}

.nav-menu-link {
  padding: 0.75rem 1.5rem;
  font-size: 1.05rem;
  color: var(--text-secondary);
  text-decoration: none;
}

.nav-menu-link:hover,
.nav-menu-link--active {
  color: var(--bark-deep);
  background: var(--cream-shade);
}

.nav-menu-cta {
  color: var(--moss-deep);
}

/* === Reveal animation === */
/* Flagged elements start hidden and offset; .animated is one-way. */
.reveal {
  opacity: 0;
  transform: translateY(20px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal.animated {
  opacity: 1;
  transform: translateY(0);
}

/* === Layout === */
.page {
  max-width: 1080px;
  margin: 0 auto;
  padding: calc(var(--nav-height) + 2rem) 1.5rem 4rem;
}

.hero {
  padding: 5rem 0 4rem;
  text-align: center;
}

.hero-title {
  font-family: var(--font-serif);
  font-size: 3.25rem;
  font-weight: 500;
  color: var(--bark-deep);
}

.hero-tagline {
  font-size: 1.2rem;
  color: var(--text-secondary);
  max-width: 34rem;
  margin: 1rem auto 0;
}

.hero-actions {
  margin-top: 2.25rem;
  display: flex;
  gap: 1rem;
  justify-content: center;
}

.btn {
  display: inline-block;
  padding: 0.7rem 1.6rem;
  border-radius: 999px;
  font-size: 1rem;
  text-decoration: none;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn--primary {
  background: var(--moss);
  color: var(--cream);
  border: 1px solid var(--moss);
}

.btn--primary:hover {
  background: var(--moss-deep);
}

.btn--ghost {
  background: transparent;
  color: var(--bark-deep);
  border: 1px solid var(--bark);
}

.btn--ghost:hover {
  background: var(--cream-shade);
}

.section-title {
  font-family: var(--font-serif);
  font-size: 2rem;
  font-weight: 500;
  color: var(--bark-deep);
}

.section-intro,
.body-text {
  margin-top: 0.75rem;
  color: var(--text-secondary);
  max-width: 44rem;
}

.about-section,
.cta-section {
  padding: 3.5rem 0;
  text-align: center;
}

.about-section .body-text,
.cta-section .body-text {
  margin-left: auto;
  margin-right: auto;
}

.cta-section .btn {
  margin-top: 1.5rem;
}

/* === Portfolio === */
.portfolio-section {
  padding: 3.5rem 0;
}

.project-list {
  margin-top: 2rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.project-card {
  border: 1px solid var(--linen-border);
  border-radius: 12px;
  background: #fff;
  overflow: hidden;
  transition: box-shadow var(--transition-normal);
}

.project-card--expanded {
  box-shadow: 0 10px 30px rgba(46, 42, 38, 0.08);
}

.project-summary {
  display: grid;
  grid-template-columns: 220px 1fr;
  gap: 1.5rem;
  width: 100%;
  padding: 0;
  border: none;
  background: none;
  text-align: left;
  cursor: pointer;
  font: inherit;
  color: inherit;
}

.project-image {
  width: 100%;
  height: 100%;
  min-height: 150px;
  object-fit: cover;
  background: var(--cream-shade);
}

.project-heading {
  padding: 1.25rem 1.5rem 1.25rem 0;
}

.project-title {
  font-family: var(--font-serif);
  font-size: 1.4rem;
  font-weight: 500;
  color: var(--charcoal);
}

.project-meta {
  font-size: 0.85rem;
  color: var(--text-muted);
  margin-top: 0.2rem;
}

.project-blurb {
  margin-top: 0.6rem;
  color: var(--text-secondary);
}

/* Collapsed but present in the DOM so print can expand everything */
.project-details {
  display: none;
  padding: 0 1.5rem 1.5rem;
  border-top: 1px solid var(--linen-border);
}

.project-details--open {
  display: block;
}

.project-paragraph {
  margin-top: 1rem;
  color: var(--text-secondary);
  max-width: 44rem;
}

/* === Contact === */
.contact-section {
  padding: 2rem 0;
}

.contact-layout {
  margin-top: 2rem;
  display: grid;
  grid-template-columns: 1fr 280px;
  gap: 3rem;
  align-items: start;
}

.aside-title {
  font-family: var(--font-serif);
  font-size: 1.3rem;
  font-weight: 500;
  color: var(--bark-deep);
}

.contact-aside .body-text {
  margin-top: 1rem;
}

/* === Inquiry form === */
.inquiry-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.25rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  border: none;
}

.field-label {
  font-size: 0.9rem;
  color: var(--charcoal);
}

.field-required {
  color: var(--danger);
}

.field-input {
  font: inherit;
  color: var(--charcoal);
  background: #fff;
  border: 1px solid var(--linen-border);
  border-radius: 8px;
  padding: 0.6rem 0.8rem;
  transition: border-color var(--transition-fast);
}

.field-input:focus {
  border-color: var(--moss);
}

.field-input--invalid {
  border-color: var(--danger);
}

.field-hint {
  font-size: 0.8rem;
  color: var(--danger);
}

.field-textarea {
  resize: vertical;
}

.type-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 0.25rem;
}

.type-pill {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.4rem 0.9rem;
  border: 1px solid var(--linen-border);
  border-radius: 999px;
  font-size: 0.9rem;
  color: var(--text-secondary);
  cursor: pointer;
  transition: border-color var(--transition-fast), color var(--transition-fast);
}

.type-pill input {
  accent-color: var(--moss);
}

.type-pill--active {
  border-color: var(--moss);
  color: var(--moss-deep);
}

.submit-btn {
  align-self: flex-start;
  font: inherit;
  padding: 0.7rem 2rem;
  border-radius: 999px;
  border: 1px solid var(--moss);
  background: var(--moss);
  color: var(--cream);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.submit-btn:hover {
  background: var(--moss-deep);
}

.submit-btn:disabled {
  opacity: 0.6;
  cursor: wait;
}

.form-success {
  background: #eef4e8;
  border: 1px solid var(--success);
  color: var(--success);
  border-radius: 8px;
  padding: 0.9rem 1.2rem;
}

.form-notice {
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 1rem;
  background: #f9ece9;
  border: 1px solid var(--danger);
  color: var(--danger);
  border-radius: 8px;
  padding: 0.9rem 1.2rem;
}

.form-notice-dismiss {
  font: inherit;
  font-size: 0.8rem;
  background: none;
  border: none;
  color: var(--danger);
  text-decoration: underline;
  cursor: pointer;
}

.form-fallback {
  border: 1px dashed var(--linen-border);
  border-radius: 8px;
  padding: 1.5rem;
  color: var(--text-secondary);
}

/* === Footer === */
.site-footer {
  border-top: 1px solid var(--linen-border);
  padding: 2rem 1.5rem;
  text-align: center;
}

.footer-line {
  color: var(--text-secondary);
}

.footer-muted {
  font-size: 0.85rem;
  color: var(--text-muted);
}

/* === Mobile === */
@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .nav-toggle {
    display: flex;
  }

  .hero-title {
    font-size: 2.4rem;
  }

  .hero-actions {
    flex-direction: column;
    align-items: center;
  }

  .project-summary {
    grid-template-columns: 1fr;
  }

  .project-heading {
    padding: 0 1.25rem 1.25rem;
  }

  .form-row {
    grid-template-columns: 1fr;
  }

  .contact-layout {
    grid-template-columns: 1fr;
  }
}

/* === Print === */
@media print {
  .site-nav,
  .nav-overlay,
  .nav-menu,
  .skip-link,
  .site-footer,
  .inquiry-form {
    display: none !important;
  }

  .reveal {
    opacity: 1;
    transform: none;
  }

  /* Every project reads in full on paper */
  .project-details {
    display: block !important;
  }
}
"#;
