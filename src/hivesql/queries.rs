// Query builders for the two summary fetches.
//
// HiveSQL speaks T-SQL. The account name is interpolated directly into the
// query text, so every builder validates it first: a valid Hive account name
// can't contain quotes, whitespace, or comment markers.

use std::sync::OnceLock;

use anyhow::Result;
use regex_lite::Regex;

/// Hive account names: dot-separated segments, each starting with a letter,
/// at least three characters, ending in a letter or digit.
fn account_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-z][a-z0-9-]+[a-z0-9](\.[a-z][a-z0-9-]+[a-z0-9])*$")
            .expect("account name regex is valid")
    })
}

/// Check that `name` is a syntactically valid Hive account name.
pub fn validate_account_name(name: &str) -> Result<()> {
    if name.len() < 3 || name.len() > 16 {
        anyhow::bail!("Invalid Hive account name {name:?}: must be 3-16 characters");
    }
    if name.contains("--") {
        anyhow::bail!("Invalid Hive account name {name:?}: consecutive dashes");
    }
    if !account_name_regex().is_match(name) {
        anyhow::bail!(
            "Invalid Hive account name {name:?}: use lowercase letters, digits, '-' and '.'"
        );
    }
    Ok(())
}

/// Every effective vote the account has cast, with its payout value in HBD.
pub fn vote_history_query(username: &str) -> Result<String> {
    validate_account_name(username)?;
    Ok(format!(
        "SELECT author, permlink, weight, timestamp, \
         CAST(pending_payout AS FLOAT) AS vote_value \
         FROM VOEffectiveCommentVotes \
         WHERE voter = '{username}' AND pending_payout_symbol = 'HBD' \
         ORDER BY timestamp DESC"
    ))
}

/// Every curation reward the account has received, converted from VESTS to HP
/// at the current vesting ratio.
pub fn curation_history_query(username: &str) -> Result<String> {
    validate_account_name(username)?;
    Ok(format!(
        "SELECT author, permlink, timestamp, \
         CAST(reward * (SELECT total_vesting_fund_hive / total_vesting_shares \
         FROM DynamicGlobalProperties) AS FLOAT) AS hp \
         FROM VOCurationRewards \
         WHERE curator = '{username}' \
         ORDER BY timestamp DESC"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_names() {
        for name in ["skatehive", "steemskate", "web-gnar", "hive.fund", "abc", "a1b2c3"] {
            assert!(validate_account_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_bad_names() {
        for name in [
            "",
            "ab",
            "Skatehive",
            "1skate",
            "skate-",
            "skate--hive",
            "a.bc",
            "thisnameiswaytoolong",
            "x' OR 1=1 --",
            "skate hive",
        ] {
            assert!(validate_account_name(name).is_err(), "{name:?} should be invalid");
        }
    }

    #[test]
    fn queries_filter_on_the_account() {
        let votes = vote_history_query("skatehive").unwrap();
        assert!(votes.contains("voter = 'skatehive'"));
        assert!(votes.contains("AS vote_value"));

        let curation = curation_history_query("skatehive").unwrap();
        assert!(curation.contains("curator = 'skatehive'"));
        assert!(curation.contains("AS hp"));
    }

    #[test]
    fn queries_refuse_injection() {
        assert!(vote_history_query("a'; DROP TABLE x; --").is_err());
        assert!(curation_history_query("a'; DROP TABLE x; --").is_err());
    }
}
