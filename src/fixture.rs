use std::{collections::HashMap, io::Read, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::common::{MyResult, MyResultTrait};

/// One scheduled match. Field names on the wire are the Portuguese keys of
/// `jogos.json`; every one of them is required and must be a string.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "horario")]
    pub time: String,
    /// Team names, e.g. `Flamengo x Vasco`.
    #[serde(rename = "jogo")]
    pub matchup: String,
    /// Where the match airs.
    #[serde(rename = "ondepassa")]
    pub broadcast: String,
}

impl Fixture {
    pub fn new<AnyStr: Into<String>>(
        date: AnyStr,
        time: AnyStr,
        matchup: AnyStr,
        broadcast: AnyStr,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            matchup: matchup.into(),
            broadcast: broadcast.into(),
        }
    }

    /// Placeholder name -> value, keyed by the wire names.
    pub(crate) fn vars(&self) -> HashMap<String, String> {
        HashMap::from([
            ("data".to_string(), self.date.clone()),
            ("horario".to_string(), self.time.clone()),
            ("jogo".to_string(), self.matchup.clone()),
            ("ondepassa".to_string(), self.broadcast.clone()),
        ])
    }
}

/// The whole `{"jogos": [...]}` document. Order is display order.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct FixtureList {
    #[serde(rename = "jogos")]
    pub fixtures: Vec<Fixture>,
}

impl FixtureList {
    pub fn from_reader<R: Read>(reader: R) -> MyResult<Self> {
        serde_json::from_reader(reader).my_result()
    }
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

impl FromStr for FixtureList {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl From<Vec<Fixture>> for FixtureList {
    fn from(fixtures: Vec<Fixture>) -> Self {
        Self { fixtures }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FailureKind;

    #[test]
    fn keeps_source_order() {
        let list: FixtureList = r#"{"jogos": [
            {"data":"12/05","horario":"20:00","jogo":"A x B","ondepassa":"Canal X"},
            {"data":"13/05","horario":"16:00","jogo":"C x D","ondepassa":"Canal Y"}
        ]}"#
        .parse()
        .expect("valid fixture list");
        assert_eq!(
            list.fixtures,
            vec![
                Fixture::new("12/05", "20:00", "A x B", "Canal X"),
                Fixture::new("13/05", "16:00", "C x D", "Canal Y"),
            ]
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let list: FixtureList = r#"{"atualizado":"hoje","jogos":[
            {"data":"1","horario":"2","jogo":"3","ondepassa":"4","estadio":"Maracanã"}
        ]}"#
        .parse()
        .expect("extra keys are not an error");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn missing_field_is_named() {
        let err = r#"{"jogos":[{"data":"1","horario":"2","jogo":"3"}]}"#
            .parse::<FixtureList>()
            .expect_err("ondepassa is required");
        assert!(err.to_string().contains("missing field `ondepassa`"), "{err}");
        let boxed: crate::common::AnyErr = err.into();
        assert_eq!(FailureKind::of(&*boxed), FailureKind::Data);
    }

    #[test]
    fn missing_top_level_key() {
        let err = r#"{"games": []}"#
            .parse::<FixtureList>()
            .expect_err("jogos is required");
        assert!(err.to_string().contains("missing field `jogos`"), "{err}");
    }

    #[test]
    fn non_string_field_is_rejected() {
        let err = r#"{"jogos":[{"data":12,"horario":"2","jogo":"3","ondepassa":"4"}]}"#
            .parse::<FixtureList>()
            .expect_err("numbers are not accepted");
        assert!(err.is_data(), "{err}");
    }

    #[test]
    fn malformed_json_is_a_parse_failure() {
        let err = FixtureList::from_reader(r#"{"jogos": ["#.as_bytes())
            .expect_err("truncated document");
        assert_eq!(FailureKind::of(&*err), FailureKind::Parse);
    }
}
