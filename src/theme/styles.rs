//! Global CSS styles for Neonfolio.
//!
//! Cyberpunk neon aesthetic: void backgrounds, glowing accents, scan
//! lines and a faint grid. Injected once from the App root.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #07070d;
  --void-panel: #0d0d16;
  --void-border: #1c1c2a;

  /* NEON ACCENTS */
  --neon-cyan: #00f0ff;
  --neon-cyan-glow: rgba(0, 240, 255, 0.35);
  --neon-pink: #ff2bd6;
  --neon-pink-glow: rgba(255, 43, 214, 0.35);
  --neon-green: #39ff14;
  --neon-green-glow: rgba(57, 255, 20, 0.35);

  /* CAROUSEL (Sky / Teal) */
  --sky: #38bdf8;
  --sky-glow: rgba(56, 189, 248, 0.2);
  --teal-border: rgba(94, 234, 212, 0.2);

  /* TEXT */
  --text-primary: #e8e8f0;
  --text-secondary: rgba(232, 232, 240, 0.7);
  --text-muted: rgba(232, 232, 240, 0.45);

  /* Typography */
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  --font-display: 'Orbitron', 'JetBrains Mono', monospace;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;
  --text-hero: 4.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --ease-settle: cubic-bezier(0.21, 0.61, 0.35, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
  overflow-x: hidden;
}

button {
  font-family: inherit;
  background: none;
  border: none;
  color: inherit;
  cursor: pointer;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
  user-select: none;
}

/* === Ambient Backdrop === */
.cyber-grid {
  background-image:
    linear-gradient(rgba(0, 240, 255, 0.05) 1px, transparent 1px),
    linear-gradient(90deg, rgba(0, 240, 255, 0.05) 1px, transparent 1px);
  background-size: 48px 48px;
}

.scan-lines {
  pointer-events: none;
  background: repeating-linear-gradient(
    0deg,
    rgba(0, 240, 255, 0.04) 0px,
    rgba(0, 240, 255, 0.04) 1px,
    transparent 1px,
    transparent 4px
  );
}

/* === Neon Text === */
.neon-cyan {
  color: var(--neon-cyan);
  text-shadow: 0 0 10px var(--neon-cyan-glow), 0 0 30px var(--neon-cyan-glow);
}

.neon-pink {
  color: var(--neon-pink);
  text-shadow: 0 0 10px var(--neon-pink-glow), 0 0 30px var(--neon-pink-glow);
}

.neon-green {
  color: var(--neon-green);
  text-shadow: 0 0 10px var(--neon-green-glow), 0 0 30px var(--neon-green-glow);
}

/* === Neon Borders === */
.neon-border-cyan {
  border: 1px solid var(--neon-cyan);
  box-shadow: 0 0 8px var(--neon-cyan-glow), inset 0 0 8px rgba(0, 240, 255, 0.08);
}

.neon-border-pink {
  border: 1px solid var(--neon-pink);
  box-shadow: 0 0 8px var(--neon-pink-glow), inset 0 0 8px rgba(255, 43, 214, 0.08);
}

.neon-border-green {
  border: 1px solid var(--neon-green);
  box-shadow: 0 0 8px var(--neon-green-glow), inset 0 0 8px rgba(57, 255, 20, 0.08);
}

/* === Neon Fills (skill bars) === */
.neon-fill-cyan {
  background: var(--neon-cyan);
  box-shadow: 0 0 10px var(--neon-cyan-glow);
}

.neon-fill-pink {
  background: var(--neon-pink);
  box-shadow: 0 0 10px var(--neon-pink-glow);
}

.neon-fill-green {
  background: var(--neon-green);
  box-shadow: 0 0 10px var(--neon-green-glow);
}

/* === Glitch Headline === */
.glitch {
  position: relative;
  letter-spacing: 0.06em;
}

.glitch::before,
.glitch::after {
  content: attr(data-text);
  position: absolute;
  inset: 0;
  opacity: 0.6;
  pointer-events: none;
}

.glitch::before {
  color: var(--neon-pink);
  transform: translate(2px, 0);
  clip-path: inset(0 0 55% 0);
  animation: glitch-shift 3.1s steps(2, end) infinite;
}

.glitch::after {
  color: var(--neon-cyan);
  transform: translate(-2px, 0);
  clip-path: inset(45% 0 0 0);
  animation: glitch-shift 2.7s steps(2, end) infinite reverse;
}

@keyframes glitch-shift {
  0%, 92% { transform: translate(0, 0); }
  94% { transform: translate(3px, -1px); }
  96% { transform: translate(-3px, 1px); }
  98% { transform: translate(2px, 1px); }
  100% { transform: translate(0, 0); }
}

/* === Navigation === */
.nav-bar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: rgba(7, 7, 13, 0.85);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--neon-cyan);
  box-shadow: 0 0 12px var(--neon-cyan-glow);
}

.nav-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  font-size: var(--text-xl);
  font-weight: 700;
  cursor: pointer;
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-link {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  letter-spacing: 0.15em;
  color: var(--text-muted);
  transition: color var(--transition-normal);
}

.nav-link:hover {
  color: var(--neon-cyan);
  text-shadow: 0 0 10px var(--neon-cyan-glow);
}

/* === Page Sections === */
.section {
  position: relative;
  padding: 5rem 1.5rem;
}

.section-inner {
  max-width: 80rem;
  margin: 0 auto;
}

.section-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  text-align: center;
  margin-bottom: 4rem;
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  position: relative;
  overflow: hidden;
}

.hero-overlay {
  position: absolute;
  inset: 0;
}

.hero-content {
  position: relative;
  text-align: center;
  padding: 0 1.5rem;
  max-width: 56rem;
}

.hero-title {
  font-size: var(--text-hero);
  font-weight: 800;
  margin-bottom: 1.5rem;
}

.hero-role {
  font-size: var(--text-2xl);
  margin-bottom: 1rem;
}

.hero-tagline {
  font-size: var(--text-lg);
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.hero-actions {
  display: flex;
  gap: 1rem;
  justify-content: center;
  flex-wrap: wrap;
}

.hero-scroll-hint {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  display: grid;
  place-items: center;
  color: var(--text-muted);
  animation: hint-bob 1.6s ease-in-out infinite;
}

.hero-scroll-hint:hover {
  color: var(--text-primary);
}

@keyframes hint-bob {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, 6px); }
}

/* === Cyber Button === */
.cyber-btn {
  position: relative;
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  overflow: hidden;
  font-family: var(--font-mono);
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  transition: all var(--transition-normal);
  cursor: pointer;
}

.cyber-btn-sm { padding: 0.5rem 1rem; font-size: var(--text-sm); }
.cyber-btn-md { padding: 0.75rem 1.5rem; font-size: var(--text-base); }
.cyber-btn-lg { padding: 1rem 2rem; font-size: var(--text-lg); }

.cyber-btn.neon-border-cyan:hover { background: rgba(0, 240, 255, 0.1); }
.cyber-btn.neon-border-pink:hover { background: rgba(255, 43, 214, 0.1); }
.cyber-btn.neon-border-green:hover { background: rgba(57, 255, 20, 0.1); }

.cyber-btn:hover { transform: translateY(-2px); }
.cyber-btn:active { transform: scale(0.96); }

.cyber-btn-sheen {
  position: absolute;
  inset: 0;
  background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.1), transparent);
  transform: translateX(-100%);
  transition: transform 0.6s ease;
  pointer-events: none;
}

.cyber-btn:hover .cyber-btn-sheen {
  transform: translateX(100%);
}

.cyber-btn-full { width: 100%; justify-content: center; }

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  align-items: center;
}

.about-portrait {
  position: relative;
  aspect-ratio: 1 / 1;
  overflow: hidden;
  margin-bottom: 1.5rem;
}

.about-portrait img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.about-portrait .scan-lines {
  position: absolute;
  inset: 0;
}

.about-resume {
  text-align: center;
}

.about-copy p.proximity-paragraph {
  font-size: var(--text-lg);
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.about-bio {
  font-size: var(--text-base);
  color: var(--text-muted);
  margin-bottom: 2rem;
}

.about-bio em { color: var(--neon-cyan); font-style: normal; }
.about-bio strong { color: var(--neon-pink); }
.about-bio code {
  color: var(--neon-green);
  background: rgba(57, 255, 20, 0.08);
  padding: 0.1em 0.35em;
}

/* === Proximity Text === */
.proximity-area {
  display: block;
}

.variable-proximity {
  display: inline-block;
  transition: font-variation-settings 120ms ease, transform 120ms ease;
}

/* === Skill Bars === */
.skill {
  margin-bottom: 1.5rem;
}

.skill-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 0.5rem;
  font-size: var(--text-sm);
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.skill-track {
  width: 100%;
  height: 0.5rem;
  background: var(--void-panel);
}

.skill-fill {
  height: 100%;
  width: 0;
  transition: width 1.5s ease-out;
}

/* === Projects Carousel === */
.carousel {
  position: relative;
  width: 100%;
}

.carousel-viewport {
  position: relative;
  margin: 0 auto;
  width: 100%;
  max-width: 1100px;
  padding: 1.5rem 0;
  perspective: 1200px;
}

.carousel-track {
  display: flex;
  will-change: transform;
  transform-style: preserve-3d;
  touch-action: pan-y;
}

.pc-slot {
  flex: 0 0 auto;
  width: 320px;
  margin: 0 25px;
}

.pc-card {
  position: relative;
  width: 100%;
  border-radius: 1rem;
  overflow: hidden;
  border: 1px solid var(--teal-border);
  background: linear-gradient(135deg, rgba(30, 41, 59, 0.85), rgba(15, 23, 42, 0.9));
  box-shadow: 0 15px 25px rgba(0, 0, 0, 0.5), 0 0 30px var(--sky-glow);
  backdrop-filter: blur(12px);
  transform-origin: center center;
  transition: all 0.6s var(--ease-settle);
}

.pc-card::before {
  content: "";
  position: absolute;
  inset: -2px;
  background: linear-gradient(
    45deg,
    transparent 0%,
    rgba(59, 130, 246, 0.8) 25%,
    rgba(16, 185, 129, 0.8) 50%,
    rgba(236, 72, 153, 0.8) 75%,
    transparent 100%
  );
  background-size: 300% 300%;
  z-index: -1;
  border-radius: 1rem;
  filter: blur(8px);
  opacity: 0;
  transition: opacity 0.5s ease;
  animation: border-glow 6s linear infinite;
}

.pc-card.active::before {
  opacity: 1;
}

@keyframes border-glow {
  0% { opacity: 0.3; background-position: 0% 50%; }
  50% { opacity: 0.5; background-position: 100% 50%; }
  100% { opacity: 0.3; background-position: 0% 50%; }
}

.pc-image {
  position: relative;
  height: 200px;
  overflow: hidden;
  border-bottom: 1px solid rgba(94, 234, 212, 0.3);
}

.pc-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 1.5s ease-out;
}

.pc-image::before {
  content: "";
  position: absolute;
  inset: 0;
  background: repeating-linear-gradient(
    0deg,
    rgba(6, 182, 212, 0.05) 0px,
    rgba(6, 182, 212, 0.05) 1px,
    transparent 1px,
    transparent 4px
  );
  opacity: 0.5;
  z-index: 5;
  pointer-events: none;
}

.pc-image::after {
  content: "";
  position: absolute;
  inset: 0;
  background:
    linear-gradient(120deg, rgba(56, 189, 248, 0.1), transparent 70%),
    radial-gradient(circle at 80% 20%, rgba(94, 234, 212, 0.15), transparent 50%);
  pointer-events: none;
}

.pc-body {
  padding: 1.75rem;
}

.pc-title {
  font-size: var(--text-xl);
  font-weight: 700;
  letter-spacing: 1px;
}

.pc-description {
  margin-top: 0.75rem;
  font-size: 0.92rem;
  font-weight: 300;
  color: var(--text-secondary);
}

.pc-actions {
  margin-top: 1.25rem;
  display: flex;
  justify-content: flex-end;
}

.pc-tech {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 0.5rem 0.75rem;
  border-top: 1px solid rgba(94, 234, 212, 0.3);
  background: rgba(15, 23, 42, 0.85);
  backdrop-filter: blur(12px);
  transform: translateY(100%);
  transition: transform var(--transition-normal);
  z-index: 25;
  display: flex;
  flex-wrap: wrap;
}

.pc-card.active:hover .pc-tech {
  transform: translateY(0);
}

.pc-tag {
  display: inline-block;
  margin: 0 0.5rem 0.5rem 0;
  padding: 2px 0.5rem;
  font-size: 0.7rem;
  color: var(--sky);
  border: 1px solid rgba(56, 189, 248, 0.3);
  background: rgba(56, 189, 248, 0.15);
  border-radius: 0.25rem;
}

.carousel-btn {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 3rem;
  height: 3rem;
  display: grid;
  place-items: center;
  border-radius: 50%;
  color: var(--sky);
  background: rgba(12, 74, 110, 0.3);
  backdrop-filter: blur(4px);
  box-shadow: 0 0 15px var(--sky-glow);
  z-index: 30;
  font-size: var(--text-xl);
}

.carousel-btn-prev { left: -12px; }
.carousel-btn-next { right: -12px; }

.carousel-dots {
  margin-top: 2rem;
  display: flex;
  justify-content: center;
  gap: 0.5rem;
}

.carousel-dot {
  width: 1.5rem;
  height: 0.25rem;
  border-radius: 0.25rem;
  background: rgba(56, 189, 248, 0.2);
  transition: background var(--transition-normal);
}

.carousel-dot.active {
  background: var(--sky);
  box-shadow: 0 0 10px var(--sky);
}

.carousel-flash {
  position: absolute;
  inset: 0;
  background: rgba(56, 189, 248, 0.1);
  z-index: 30;
  pointer-events: none;
  animation: carousel-flash-fade 0.6s ease;
}

@keyframes carousel-flash-fade {
  0% { opacity: 0; }
  50% { opacity: 0.3; }
  100% { opacity: 0; }
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
}

.contact-heading {
  font-size: var(--text-xl);
  font-weight: 700;
  margin-bottom: 2rem;
}

.contact-pitch {
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.contact-links {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.contact-link {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  transition: transform var(--transition-normal);
}

.contact-link:hover {
  transform: translateX(10px);
}

.contact-link .glyph {
  font-size: var(--text-lg);
}

/* === Contact Form === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  max-width: 32rem;
}

.form-field label {
  display: block;
  font-size: var(--text-sm);
  text-transform: uppercase;
  letter-spacing: 0.1em;
  margin-bottom: 0.5rem;
}

.form-field input,
.form-field textarea {
  width: 100%;
  padding: 0.75rem;
  font-family: var(--font-mono);
  font-size: var(--text-base);
  color: var(--text-primary);
  background: rgba(7, 7, 13, 0.5);
  outline: none;
  resize: none;
  transition: box-shadow var(--transition-normal);
}

.form-field input:focus,
.form-field textarea:focus {
  box-shadow: 0 0 18px var(--neon-cyan-glow);
}

.form-status {
  font-size: var(--text-sm);
  color: var(--neon-green);
  min-height: 1.5rem;
}

.form-status.error {
  color: var(--neon-pink);
}

/* === Footer === */
.footer {
  padding: 2rem 1.5rem;
  border-top: 1px solid var(--neon-cyan);
  box-shadow: 0 0 12px var(--neon-cyan-glow);
  text-align: center;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Responsive === */
@media (max-width: 900px) {
  .hero-title { font-size: var(--text-3xl); }
  .about-grid, .contact-grid { grid-template-columns: 1fr; }
  .nav-links { gap: 1rem; }
  .pc-slot {
    width: min(320px, 72vw);
    margin: 0 16px;
  }
}
"#;
