use super::json::to_json;
use crate::test_utils::nfa;

#[test]
fn pretty_dump() {
    insta::assert_snapshot!(to_json(&nfa("a"), true).unwrap(), @r#"
    {
      "initial": "q0",
      "alphabet": [
        "a"
      ],
      "states": [
        {
          "name": "q0",
          "final": false
        },
        {
          "name": "q1",
          "final": true
        }
      ],
      "transitions": [
        {
          "from": "q0",
          "symbol": "a",
          "to": "q1"
        }
      ]
    }
    "#);
}

#[test]
fn epsilon_is_null() {
    let json = to_json(&nfa("λ.λ"), false).unwrap();
    assert_eq!(
        json,
        r#"{"initial":"q0","alphabet":[],"states":[{"name":"q0","final":false},{"name":"q1","final":true}],"transitions":[{"from":"q0","symbol":null,"to":"q1"}]}"#
    );
}
