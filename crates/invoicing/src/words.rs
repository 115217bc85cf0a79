//! Amounts in words, Indian numbering (thousand, lakh, crore).

const ONES: [&str; 10] = [
    "", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];

const TEENS: [&str; 10] = [
    "TEN",
    "ELEVEN",
    "TWELVE",
    "THIRTEEN",
    "FOURTEEN",
    "FIFTEEN",
    "SIXTEEN",
    "SEVENTEEN",
    "EIGHTEEN",
    "NINETEEN",
];

const TENS: [&str; 10] = [
    "", "", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY", "SEVENTY", "EIGHTY", "NINETY",
];

const THOUSAND: u64 = 1_000;
const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

/// Upper-case words for a whole amount, e.g. `150000` -> `"ONE LAKH FIFTY THOUSAND"`.
pub fn amount_in_words(n: u64) -> String {
    if n == 0 {
        return "ZERO".to_string();
    }
    let mut parts = Vec::new();
    push_indian(n, &mut parts);
    parts.join(" ")
}

fn push_indian(n: u64, parts: &mut Vec<&'static str>) {
    // Crores can exceed 99, so the crore count is itself spelled in Indian units.
    if n >= CRORE {
        push_indian(n / CRORE, parts);
        parts.push("CRORE");
    }
    let below_crore = n % CRORE;
    if below_crore >= LAKH {
        push_below_hundred(below_crore / LAKH, parts);
        parts.push("LAKH");
    }
    let below_lakh = below_crore % LAKH;
    if below_lakh >= THOUSAND {
        push_below_hundred(below_lakh / THOUSAND, parts);
        parts.push("THOUSAND");
    }
    push_below_thousand(below_lakh % THOUSAND, parts);
}

fn push_below_thousand(n: u64, parts: &mut Vec<&'static str>) {
    if n >= 100 {
        parts.push(ONES[(n / 100) as usize]);
        parts.push("HUNDRED");
    }
    push_below_hundred(n % 100, parts);
}

fn push_below_hundred(n: u64, parts: &mut Vec<&'static str>) {
    match n {
        0 => {}
        1..=9 => parts.push(ONES[n as usize]),
        10..=19 => parts.push(TEENS[(n - 10) as usize]),
        _ => {
            parts.push(TENS[(n / 10) as usize]);
            if n % 10 != 0 {
                parts.push(ONES[(n % 10) as usize]);
            }
        }
    }
}
