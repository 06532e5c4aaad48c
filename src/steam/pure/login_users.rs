use crate::steam::types::LoginUser;
use crate::vdf::Document;

/// Convert a SteamID64 into the SteamID3 account number used for userdata
pub fn to_steamid3(steamid64: u64) -> u32 {
    (steamid64 & 0xffff_ffff) as u32
}

/// Pick the account that logged in most recently from loginusers.vdf
///
/// Accounts with equal timestamps keep the first one seen. Steam does not
/// define an order here, so such ties are effectively arbitrary.
pub fn current_user(doc: &Document) -> Option<LoginUser> {
    let users = doc.get_doc("users")?;

    let mut current: Option<LoginUser> = None;
    for (id, data) in users.iter() {
        let (Ok(steamid64), Some(data)) = (id.parse::<u64>(), data.as_doc()) else {
            continue;
        };
        let user = LoginUser {
            steamid3: to_steamid3(steamid64),
            account_name: data.get_str("AccountName").unwrap_or_default().to_string(),
            timestamp: data
                .get_ci("Timestamp")
                .and_then(|v| v.as_u64())
                .unwrap_or(0),
        };
        if current.as_ref().is_none_or(|c| user.timestamp > c.timestamp) {
            current = Some(user);
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdf::parse_text;

    #[test]
    fn test_steamid3() {
        assert_eq!(to_steamid3(76561198035859048), 75593320);
    }

    #[test]
    fn test_most_recent_user() {
        let doc = parse_text(
            br#"
"users"
{
    "76561198000000001" { "AccountName" "old" "Timestamp" "1500000000" }
    "76561198000000002" { "AccountName" "new" "Timestamp" "1600000000" }
    "76561198000000003" { "AccountName" "never" }
}
"#,
        )
        .unwrap();
        let user = current_user(&doc).unwrap();
        assert_eq!(user.account_name, "new");
        assert_eq!(user.steamid3, to_steamid3(76561198000000002));
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        let doc = parse_text(
            br#""users" {
                "76561198000000001" { "AccountName" "a" "Timestamp" "5" }
                "76561198000000002" { "AccountName" "b" "Timestamp" "5" }
            }"#,
        )
        .unwrap();
        assert_eq!(current_user(&doc).unwrap().account_name, "a");
    }

    #[test]
    fn test_no_users() {
        assert!(current_user(&Document::new()).is_none());
    }
}
