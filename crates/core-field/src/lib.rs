//! Amount field state.
//!
//! Holds what an amount input needs between keystrokes: the current
//! `FormattedAmount`, the locale, an optional controlled value, and the
//! debounced copy used for animated rendering. Typed text is never mutated in
//! place; `on_type` returns the text the caller should put in its submission
//! field.
//!
//! Sync rule (run on `set_controlled` / `set_locale`):
//! - controlled value present and (locale changed or it differs from the
//!   current number): re-format from the controlled value
//! - locale changed, uncontrolled: re-format from the current number
//! - otherwise: re-format the current display string, which keeps a
//!   trailing separator the user is in the middle of typing

use core_debounce::{DISPLAY_DEBOUNCE, DebouncedValue, Hydration, PreviousValue};
use core_format::{AmountContext, FormattedAmount, format_amount_with, format_value_with};
use core_keys::{KeyedGlyph, keyed_glyphs};
use core_locale::{LocaleFormat, SeparatorSet, currency_symbol};
use std::time::{Duration, Instant};
use tracing::debug;

/// Symbol shown when the format carries no currency.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone)]
pub struct FieldOptions {
    pub format: LocaleFormat,
    pub controlled: Option<f64>,
    pub default_value: String,
    pub debounce: Duration,
    pub currency_symbol: Option<String>,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            format: LocaleFormat::default(),
            controlled: None,
            default_value: "0".to_string(),
            debounce: DISPLAY_DEBOUNCE,
            currency_symbol: None,
        }
    }
}

impl FieldOptions {
    pub fn new(format: LocaleFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeOutcome {
    /// Canonical numeric text for the submission field.
    pub submission: String,
    pub amount: FormattedAmount,
}

#[derive(Debug)]
pub struct AmountField {
    ctx: AmountContext,
    controlled: Option<f64>,
    value: FormattedAmount,
    display: DebouncedValue<FormattedAmount>,
    previous_locale: PreviousValue<LocaleFormat>,
    hydration: Hydration,
    currency_symbol: String,
}

impl AmountField {
    pub fn new(options: FieldOptions) -> Self {
        let ctx = AmountContext::new(&options.format);
        let value = match options.controlled {
            Some(v) => format_value_with(&ctx, v),
            None => format_amount_with(&ctx, &options.default_value),
        };
        let symbol = options
            .currency_symbol
            .or_else(|| currency_symbol(&options.format))
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());
        let mut previous_locale = PreviousValue::new();
        previous_locale.observe(options.format);
        Self {
            ctx,
            controlled: options.controlled,
            display: DebouncedValue::new(value.clone(), Some(options.debounce)),
            value,
            previous_locale,
            hydration: Hydration::new(),
            currency_symbol: symbol,
        }
    }

    /// Apply typed text. The numeric value updates now; the display string
    /// follows after the debounce delay once the field is hydrated.
    pub fn on_type(&mut self, raw: &str, now: Instant) -> TypeOutcome {
        let amount = format_amount_with(&self.ctx, raw);
        self.apply(amount.clone(), now);
        TypeOutcome {
            submission: amount.submission_value(),
            amount,
        }
    }

    pub fn set_controlled(&mut self, controlled: Option<f64>, now: Instant) {
        self.controlled = controlled;
        self.sync(now);
    }

    pub fn set_locale(&mut self, format: LocaleFormat, now: Instant) {
        self.ctx = AmountContext::new(&format);
        self.sync(now);
    }

    fn sync(&mut self, now: Instant) {
        let locale_changed = self
            .previous_locale
            .changed(self.ctx.locale_format().clone());
        let next = match self.controlled {
            Some(c) if locale_changed || c != self.value.as_number => {
                debug!(target: "field", locale_changed, "field_reset_from_controlled");
                format_value_with(&self.ctx, c)
            }
            _ if locale_changed => {
                debug!(target: "field", locale = self.ctx.locale_format().locale(), "field_locale_changed");
                format_value_with(&self.ctx, self.value.as_number)
            }
            _ => format_amount_with(&self.ctx, &self.value.as_string),
        };
        self.apply(next, now);
    }

    fn apply(&mut self, amount: FormattedAmount, now: Instant) {
        if self.hydration.is_hydrated() {
            self.display.set(amount.clone(), now);
        } else {
            self.display.set_immediate(amount.clone());
        }
        self.value = amount;
    }

    /// Mark the first interactive pass done; display updates are debounced
    /// from here on.
    pub fn hydrate(&mut self) {
        self.hydration.mark_hydrated();
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydration.is_hydrated()
    }

    /// Current (undelayed) amount; this is what the editable text shows.
    pub fn value(&self) -> &FormattedAmount {
        &self.value
    }

    pub fn hidden_value(&self) -> String {
        self.value.submission_value()
    }

    /// Debounced amount for the animated rendering.
    pub fn display(&mut self, now: Instant) -> &FormattedAmount {
        self.display.get(now)
    }

    pub fn keyed_display(&mut self, now: Instant) -> Vec<KeyedGlyph> {
        let separators = *self.ctx.separators();
        keyed_glyphs(&self.display.get(now).as_string, &separators)
    }

    pub fn separators(&self) -> &SeparatorSet {
        self.ctx.separators()
    }

    pub fn locale_format(&self) -> &LocaleFormat {
        self.ctx.locale_format()
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn controlled(&self) -> Option<f64> {
        self.controlled
    }
}
