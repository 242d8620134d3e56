//! Positional (radix point) formatting of continued fractions

use crate::cont_frac::ContinuedFraction;
use crate::error::CfError;
use num_bigint::Sign;
use num_traits::{ToPrimitive, Zero};

/// Where the negative sign goes around the formatted magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegativePattern {
    /// `-1.5`
    Leading,
    /// `1.5-`
    Trailing,
    /// `(1.5)`, the sign string is not used
    Parentheses,
    /// `- 1.5`
    LeadingSpace,
}

/// Options for [ContinuedFraction::format()]
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    pub radix: u32,
    /// Maximum number of digits after the separator, trailing zeros are stripped
    pub precision: usize,
    /// Glyph for each digit value, at least `radix` of them
    pub digits: Vec<char>,
    pub decimal_separator: String,
    pub negative_sign: String,
    pub negative_pattern: NegativePattern,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            radix: 10,
            precision: 16,
            digits: "0123456789abcdefghijklmnopqrstuvwxyz".chars().collect(),
            decimal_separator: String::from("."),
            negative_sign: String::from("-"),
            negative_pattern: NegativePattern::Leading,
        }
    }
}

impl FormatOptions {
    pub fn radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn digits(mut self, glyphs: &str) -> Self {
        self.digits = glyphs.chars().collect();
        self
    }

    pub fn decimal_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    pub fn negative_sign<S: Into<String>>(mut self, sign: S) -> Self {
        self.negative_sign = sign.into();
        self
    }

    pub fn negative_pattern(mut self, pattern: NegativePattern) -> Self {
        self.negative_pattern = pattern;
        self
    }

    fn validate(&self) -> Result<(), CfError> {
        if !(2..=36).contains(&self.radix) {
            return Err(CfError::InvalidRadix(self.radix));
        }
        if self.digits.len() < self.radix as usize {
            return Err(CfError::MissingDigits { radix: self.radix, available: self.digits.len() });
        }
        Ok(())
    }
}

impl ContinuedFraction {
    /// Format the number in positional notation.
    ///
    /// One digit beyond the precision is extracted, the last kept digit is rounded
    /// half up with the carry propagated leftward, and trailing zeros are removed.
    /// A value rounding to zero is printed without sign.
    pub fn format(&self, options: &FormatOptions) -> Result<String, CfError> {
        options.validate()?;
        let negative = self.sign()? == Sign::Minus;
        let radix = options.radix;

        let mut digits = self.digits(radix);
        let mut integer = digits.next().ok_or(CfError::Infinite)?;
        // digits are always below the radix
        let mut fraction: Vec<u32> = digits.take(options.precision + 1).filter_map(|d| d.to_u32()).collect();

        if fraction.len() > options.precision {
            let guard = fraction.pop().unwrap_or(0);
            if guard * 2 >= radix {
                let mut carry = true;
                for d in fraction.iter_mut().rev() {
                    *d += 1;
                    if *d < radix {
                        carry = false;
                        break;
                    }
                    *d = 0;
                }
                if carry {
                    integer += 1;
                }
            }
        }
        while fraction.last() == Some(&0) {
            fraction.pop();
        }

        let mut body: String = integer
            .magnitude()
            .to_radix_be(radix)
            .into_iter()
            .map(|d| options.digits[d as usize])
            .collect();
        if !fraction.is_empty() {
            body.push_str(&options.decimal_separator);
            body.extend(fraction.iter().map(|&d| options.digits[d as usize]));
        }

        if !negative || (fraction.is_empty() && integer.is_zero()) {
            return Ok(body);
        }
        Ok(match options.negative_pattern {
            NegativePattern::Leading => format!("{}{}", options.negative_sign, body),
            NegativePattern::Trailing => format!("{}{}", body, options.negative_sign),
            NegativePattern::Parentheses => format!("({})", body),
            NegativePattern::LeadingSpace => format!("{} {}", options.negative_sign, body),
        })
    }

    /// Format with default options in the given radix
    pub fn to_string_radix(&self, radix: u32) -> Result<String, CfError> {
        self.format(&FormatOptions::default().radix(radix))
    }
}
