//! Fixed-point rendering of server scalars.
//!
//! Rounding works on the shortest decimal representation of the value rather
//! than its binary expansion, so `1.005` reads as `1.01` and `0.8765` as
//! `87.65%`.

/// Round `value` half away from zero to `places` decimals.
pub fn fixed(value: f64, places: usize) -> String {
	shifted_fixed(value, 0, places)
}

/// Render a fraction as a percentage with two decimals, e.g. `87.65%`.
pub fn percent(fraction: f64) -> String {
	format!("{}%", shifted_fixed(fraction, 2, 2))
}

/// Multiply `value` by `10^shift` and round to `places` decimals, digit-wise.
fn shifted_fixed(value: f64, shift: usize, places: usize) -> String {
	if !value.is_finite() {
		return value.to_string();
	}

	// f64 Display never switches to exponent notation.
	let repr = value.abs().to_string();
	let (int, frac) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
	let mut digits: Vec<u8> = int.bytes().chain(frac.bytes()).map(|b| b - b'0').collect();
	let mut point = int.len() + shift;
	let keep = point + places;
	if digits.len() <= keep {
		digits.resize(keep + 1, 0);
	}

	let round_up = digits[keep] >= 5;
	digits.truncate(keep);
	if round_up {
		let mut carry = true;
		for d in digits.iter_mut().rev() {
			if *d == 9 {
				*d = 0;
			} else {
				*d += 1;
				carry = false;
				break;
			}
		}
		if carry {
			digits.insert(0, 1);
			point += 1;
		}
	}

	let lead = digits[..point - 1].iter().take_while(|&&d| d == 0).count();
	let mut out = String::with_capacity(digits.len() + 2);
	if value < 0.0 && digits.iter().any(|&d| d != 0) {
		out.push('-');
	}
	out.extend(digits[lead..point].iter().map(|&d| char::from(b'0' + d)));
	if places > 0 {
		out.push('.');
		out.extend(digits[point..].iter().map(|&d| char::from(b'0' + d)));
	}
	out
}
