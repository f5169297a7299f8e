//! Transfer optimizer: greedy minimal-transfer settlement of residual
//! balances.

use crate::domain::{PinnedTransfer, PlayerBalance, SuggestedTransfer};

/// Produce a transfer list that zeroes all residual balances.
///
/// Greedy largest-first pairing: creditors and debtors are each sorted
/// descending by magnitude, then the front of each list is matched and
/// the smaller remaining amount transferred, advancing past any party
/// whose remainder hits zero. Emits at most `min(|creditors|,
/// |debtors|)` transfers, which is at most N-1 for N players with
/// non-zero balance.
///
/// Every emitted amount and every intermediate remainder is rounded to
/// 2 decimal places (half-up) so rounding error cannot accumulate
/// across steps.
///
/// This exact greedy pairing is kept for output compatibility with
/// previously stored sessions; it is not a proven minimum-cardinality
/// solver.
pub fn optimize_transfers(residual: &[PlayerBalance]) -> Vec<SuggestedTransfer> {
    let mut creditors: Vec<PlayerBalance> = residual
        .iter()
        .filter(|balance| balance.net.is_positive())
        .cloned()
        .collect();
    let mut debtors: Vec<PlayerBalance> = residual
        .iter()
        .filter(|balance| balance.net.is_negative())
        .map(|balance| PlayerBalance::new(balance.name.clone(), balance.net.abs()))
        .collect();

    // Stable sorts keep recomputation deterministic when magnitudes tie.
    creditors.sort_by(|a, b| b.net.cmp(&a.net));
    debtors.sort_by(|a, b| b.net.cmp(&a.net));

    let mut transfers = Vec::new();
    let mut credit_idx = 0;
    let mut debt_idx = 0;

    while credit_idx < creditors.len() && debt_idx < debtors.len() {
        let amount = creditors[credit_idx]
            .net
            .min(debtors[debt_idx].net)
            .round_cents();

        if amount.is_positive() {
            transfers.push(SuggestedTransfer {
                from: debtors[debt_idx].name.clone(),
                to: creditors[credit_idx].name.clone(),
                amount,
                recommended: false,
            });
            creditors[credit_idx].net = (creditors[credit_idx].net - amount).round_cents();
            debtors[debt_idx].net = (debtors[debt_idx].net - amount).round_cents();
        } else {
            // Sub-cent residue rounds to nothing; drop the smaller side
            // so the loop always terminates.
            if creditors[credit_idx].net <= debtors[debt_idx].net {
                credit_idx += 1;
            } else {
                debt_idx += 1;
            }
            continue;
        }

        if !creditors[credit_idx].net.is_positive() {
            credit_idx += 1;
        }
        if !debtors[debt_idx].net.is_positive() {
            debt_idx += 1;
        }
    }

    transfers
}

/// Merged settlement output: pinned transfers first (flagged
/// `recommended = true`), optimizer output after.
pub fn merge_transfers(
    pinned: &[PinnedTransfer],
    suggested: Vec<SuggestedTransfer>,
) -> Vec<SuggestedTransfer> {
    pinned
        .iter()
        .map(SuggestedTransfer::from)
        .chain(suggested)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Money;

    fn m(s: &str) -> Money {
        Money::from_str_canonical(s).unwrap()
    }

    fn balance(name: &str, net: &str) -> PlayerBalance {
        PlayerBalance::new(name.into(), m(net))
    }

    fn transfer(from: &str, to: &str, amount: &str) -> SuggestedTransfer {
        SuggestedTransfer {
            from: from.into(),
            to: to.into(),
            amount: m(amount),
            recommended: false,
        }
    }

    #[test]
    fn test_two_player_settle() {
        let transfers = optimize_transfers(&[balance("A", "50"), balance("B", "-50")]);
        assert_eq!(transfers, vec![transfer("B", "A", "50")]);
    }

    #[test]
    fn test_largest_pairs_first() {
        let transfers = optimize_transfers(&[
            balance("A", "30"),
            balance("B", "70"),
            balance("C", "-60"),
            balance("D", "-40"),
        ]);

        assert_eq!(
            transfers,
            vec![
                transfer("C", "B", "60"),
                transfer("D", "B", "10"),
                transfer("D", "A", "30"),
            ]
        );
    }

    #[test]
    fn test_zero_balances_produce_no_transfers() {
        assert!(optimize_transfers(&[]).is_empty());
        assert!(optimize_transfers(&[balance("A", "0"), balance("B", "0")]).is_empty());
    }

    #[test]
    fn test_cardinality_bound() {
        let residual = [
            balance("A", "25"),
            balance("B", "25"),
            balance("C", "-10"),
            balance("D", "-15"),
            balance("E", "-25"),
        ];
        let transfers = optimize_transfers(&residual);
        assert!(transfers.len() <= residual.len() - 1);
    }

    #[test]
    fn test_conservation_per_debtor() {
        let residual = [
            balance("A", "33.34"),
            balance("B", "16.66"),
            balance("C", "-20"),
            balance("D", "-30"),
        ];
        let transfers = optimize_transfers(&residual);

        for debtor in residual.iter().filter(|b| b.net.is_negative()) {
            let sent = transfers
                .iter()
                .filter(|t| t.from == debtor.name)
                .fold(Money::zero(), |acc, t| acc + t.amount);
            assert_eq!(sent, debtor.net.abs(), "debtor {}", debtor.name);
        }
    }

    #[test]
    fn test_amounts_rounded_to_cents() {
        let transfers = optimize_transfers(&[
            balance("A", "10.005"),
            balance("B", "-10.005"),
        ]);

        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].amount, m("10.01"));
    }

    #[test]
    fn test_sub_cent_residue_terminates() {
        let transfers = optimize_transfers(&[
            balance("A", "0.004"),
            balance("B", "-0.004"),
        ]);
        assert!(transfers.is_empty());
    }

    #[test]
    fn test_merge_puts_pinned_first_with_flag() {
        let pinned = vec![PinnedTransfer::new("B".into(), "A".into(), m("30"))];
        let merged = merge_transfers(&pinned, vec![transfer("C", "A", "20")]);

        assert_eq!(merged.len(), 2);
        assert!(merged[0].recommended);
        assert_eq!(merged[0].from, "B".into());
        assert_eq!(merged[0].amount, m("30"));
        assert!(!merged[1].recommended);
    }
}
