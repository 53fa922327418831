use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use wff_check::{
    normal_form::{check_normal_form, NormalForm},
    recognizer::{recognize, Recognition},
};

const SEED: u64 = 0x5eed;
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn spacing(rng: &mut StdRng) -> &'static str {
    [" ", "", "", "\t", "  ", "\n"]
        .choose(rng)
        .copied()
        .unwrap_or_default()
}

mod well_formed {
    use super::*;

    /// A random well-formed formula, with its size.
    fn formula(rng: &mut StdRng, depth: usize) -> (String, usize) {
        let choice = match depth {
            0 => rng.gen_range(0..2),
            _ => rng.gen_range(0..4),
        };

        match choice {
            0 => {
                let numeral = if rng.gen_bool(0.5) { "1" } else { "0" };
                (numeral.to_string(), 0)
            }
            1 => {
                let symbol = ALPHABET[rng.gen_range(0..ALPHABET.len())] as char;
                (symbol.to_string(), 1)
            }
            2 => {
                let (inner, size) = formula(rng, depth - 1);
                let gap = spacing(rng);
                (format!("({gap}!{inner})"), size + 1)
            }
            _ => {
                let (left, left_size) = formula(rng, depth - 1);
                let (right, right_size) = formula(rng, depth - 1);
                let connective = ["&", "|", "->", "~"].choose(rng).copied().unwrap_or("&");
                let gap = spacing(rng);
                (
                    format!("({left}{gap}{connective}{gap}{right})"),
                    left_size + right_size + 1,
                )
            }
        }
    }

    #[test]
    fn sizes_are_predicted() {
        let mut rng = StdRng::seed_from_u64(SEED);

        for _ in 0..500 {
            let depth = rng.gen_range(0..8);
            let (text, size) = formula(&mut rng, depth);
            assert_eq!(
                recognize(&text),
                Ok(Recognition::Accepted { size }),
                "{text}"
            );
        }
    }

    #[test]
    fn truncation_is_rejected() {
        let mut rng = StdRng::seed_from_u64(SEED + 1);

        for _ in 0..200 {
            let (text, _) = formula(&mut rng, 4);
            if !text.starts_with('(') {
                continue;
            }
            let cut = text.trim_end_matches(')');
            let dropped = text.len() - cut.len();
            let shortened = &text[..text.len() - rng.gen_range(1..=dropped)];
            assert!(
                matches!(recognize(shortened), Ok(Recognition::Rejected(_))),
                "{shortened}"
            );
        }
    }

    #[test]
    fn extension_is_rejected() {
        let mut rng = StdRng::seed_from_u64(SEED + 2);

        for _ in 0..200 {
            let (text, _) = formula(&mut rng, 4);
            let extended = format!("{text})");
            assert!(
                matches!(recognize(&extended), Ok(Recognition::Rejected(_))),
                "{extended}"
            );
        }
    }
}

mod normal_forms {
    use super::*;

    /// Some distinct clauses over `symbols`, as sign assignments.
    fn assignments(rng: &mut StdRng, symbols: usize) -> Vec<Vec<bool>> {
        let mut all = (0..1_usize << symbols)
            .map(|bits| (0..symbols).map(|i| bits & (1 << i) != 0).collect())
            .collect::<Vec<Vec<bool>>>();
        all.shuffle(rng);

        let count = rng.gen_range(1..=all.len());
        all.truncate(count);
        all
    }

    fn clause(rng: &mut StdRng, symbols: &[char], signs: &[bool], form: NormalForm) -> String {
        let separator = match form {
            NormalForm::SDNF => "&",
            NormalForm::SKNF => "|",
        };

        let mut literals = symbols
            .iter()
            .zip(signs)
            .map(|(symbol, negated)| match *negated {
                true => format!("!{symbol}"),
                false => symbol.to_string(),
            })
            .collect::<Vec<_>>();
        literals.shuffle(rng);

        let gap = spacing(rng);
        format!("({})", literals.join(&format!("{gap}{separator}{gap}")))
    }

    fn canonical(rng: &mut StdRng, form: NormalForm) -> (String, Vec<String>) {
        let mut alphabet = ALPHABET.iter().map(|b| *b as char).collect::<Vec<_>>();
        alphabet.shuffle(rng);
        let symbols = &alphabet[..rng.gen_range(1..=4)];

        let clauses = assignments(rng, symbols.len())
            .iter()
            .map(|signs| clause(rng, symbols, signs, form))
            .collect::<Vec<_>>();

        let separator = match form {
            NormalForm::SDNF => "|",
            NormalForm::SKNF => "&",
        };
        let gap = spacing(rng);
        (clauses.join(&format!("{gap}{separator}{gap}")), clauses)
    }

    #[test]
    fn canonical_sets_hold() {
        let mut rng = StdRng::seed_from_u64(SEED + 3);

        for form in [NormalForm::SDNF, NormalForm::SKNF] {
            for _ in 0..200 {
                let (text, _) = canonical(&mut rng, form);
                assert!(check_normal_form(&text, form), "{text} in {form}");
            }
        }
    }

    #[test]
    fn repeated_clause_fails() {
        let mut rng = StdRng::seed_from_u64(SEED + 4);

        for form in [NormalForm::SDNF, NormalForm::SKNF] {
            for _ in 0..200 {
                let (text, clauses) = canonical(&mut rng, form);
                let separator = match form {
                    NormalForm::SDNF => "|",
                    NormalForm::SKNF => "&",
                };
                let repeated = clauses
                    .choose(&mut rng)
                    .cloned()
                    .unwrap_or_default();
                let doubled = format!("{text}{separator}{repeated}");
                assert!(!check_normal_form(&doubled, form), "{doubled} in {form}");
            }
        }
    }

    #[test]
    fn implication_fails() {
        let mut rng = StdRng::seed_from_u64(SEED + 5);

        for form in [NormalForm::SDNF, NormalForm::SKNF] {
            for _ in 0..100 {
                let (text, _) = canonical(&mut rng, form);
                let spoiled = format!("({text})->A");
                assert!(!check_normal_form(&spoiled, form), "{spoiled} in {form}");
            }
        }
    }
}
