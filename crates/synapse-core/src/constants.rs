use std::time::Duration;

// Shared timing and geometry tuning for the cursor trail and scroll effects.

// Cursor smoothing
pub const CURSOR_SMOOTHING: f32 = 0.15; // fraction of remaining distance covered per frame
pub const IDLE_TIMEOUT: Duration = Duration::from_millis(100); // clears the moving flag

// Emission throttle
pub const EMIT_INTERVAL: Duration = Duration::from_millis(80); // ~12 bursts per second cap
pub const BURST_STAGGER: Duration = Duration::from_millis(50);
pub const BURST_MIN: usize = 2;
pub const BURST_MAX: usize = 3;

// Synapse segment
pub const SYNAPSE_MIN_LENGTH: f32 = 60.0;
pub const SYNAPSE_MAX_LENGTH: f32 = 180.0;
pub const SYNAPSE_THICKNESS: f32 = 2.0;
pub const SYNAPSE_ANIMATION: Duration = Duration::from_millis(2500);
pub const SYNAPSE_LIFETIME: Duration = Duration::from_millis(3000);

// Glow nodes at both ends
pub const NODE_HALF_SIZE: f32 = 2.25;
pub const NODE_ANIMATION: Duration = Duration::from_millis(3000);
pub const NODE_LIFETIME: Duration = Duration::from_millis(3500);

// Travelling pulse
pub const PULSE_HALF_SIZE: f32 = 3.75;
pub const PULSE_DELAY: Duration = Duration::from_millis(200); // after the parent synapse
pub const PULSE_TRAVEL: Duration = Duration::from_millis(1200);
pub const PULSE_FADE_ANIMATION: Duration = Duration::from_millis(1800);
pub const PULSE_LINGER: Duration = Duration::from_millis(500); // after arrival, before detach

// CSS class and keyframe names shared with the stylesheet
pub const SYNAPSE_CLASS: &str = "synapse";
pub const NODE_CLASS: &str = "synapse-node";
pub const PULSE_CLASS: &str = "electrical-pulse";
pub const SYNAPSE_KEYFRAMES: &str = "enhancedSynapseFlow";
pub const NODE_KEYFRAMES: &str = "enhancedNodeGlow";
pub const PULSE_KEYFRAMES: &str = "enhancedElectricalPulse";

// Elements over which no trail is emitted and the cursor shows its hover state
pub const INTERACTIVE_SELECTORS: [&str; 9] = [
    "a",
    "button",
    ".btn",
    ".tech-card",
    ".service-card",
    ".case-study",
    ".nav-link",
    "input",
    "textarea",
];

// Scroll parallax
pub const HERO_PARALLAX_RATE: f32 = 0.3;
pub const SECTION_PARALLAX_BASE: f32 = 0.5;
pub const SECTION_PARALLAX_STEP: f32 = 0.1; // added per content section index
pub const TEAM_PARALLAX_BASE: f32 = 0.1;
pub const TEAM_PARALLAX_STEP: f32 = 0.05;
pub const ICON_FLOAT_FREQUENCY: f32 = 0.01; // radians per scrolled pixel
pub const ICON_FLOAT_AMPLITUDE: f32 = 5.0;
pub const CARD_FLOAT_AMPLITUDE: f32 = 3.0;
pub const CARD_GLOW_BLUR: f32 = 30.0;
pub const CARD_GLOW_ALPHA: f32 = 0.3;

// Scroll glow and hue
pub const GLOW_BLUR_BASE: f32 = 20.0;
pub const GLOW_BLUR_SPAN: f32 = 20.0;
pub const GLOW_ALPHA_BASE: f32 = 0.3;
pub const GLOW_ALPHA_SPAN: f32 = 0.4;
pub const HUE_BASE: u32 = 200; // blue
pub const HUE_SPAN: f32 = 60.0; // towards purple

// Counters
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
pub const COUNTER_TICK: Duration = Duration::from_millis(16);
