//! The fixed verification table.
//!
//! One case per matching-policy rule, in the order the rules escalate:
//! normalization, typos, transliteration, nicknames, prefix spellings, then
//! the rules that must NOT match. Ids are stable; rows in a run report refer
//! back to them.

use crate::harness::NameTestCase;

pub static NAME_TEST_CASES: [NameTestCase; 12] = [
    NameTestCase {
        id: 1,
        target_name: "David Kim",
        candidate_name: "David Kim",
        expected_match: true,
    },
    NameTestCase {
        id: 2,
        target_name: "Niamh O'Connor",
        candidate_name: "niamh oconnor",
        expected_match: true,
    },
    NameTestCase {
        id: 3,
        target_name: "Anne-Marie Laurent",
        candidate_name: "Anne Marie Laurent",
        expected_match: true,
    },
    NameTestCase {
        id: 4,
        target_name: "Mikhail Petrov",
        candidate_name: "Mikhial Petrov",
        expected_match: true,
    },
    NameTestCase {
        id: 5,
        target_name: "Yusuf Ali",
        candidate_name: "Yousef Ali",
        expected_match: true,
    },
    NameTestCase {
        id: 6,
        target_name: "Robert Smith",
        candidate_name: "Bob Smith",
        expected_match: true,
    },
    NameTestCase {
        id: 7,
        target_name: "Elizabeth Turner",
        candidate_name: "Liz Turner",
        expected_match: true,
    },
    NameTestCase {
        id: 8,
        target_name: "Sean McDonald",
        candidate_name: "Sean Macdonald",
        expected_match: true,
    },
    NameTestCase {
        id: 9,
        target_name: "Karim Haddad",
        candidate_name: "Karim Haddadi",
        expected_match: false,
    },
    NameTestCase {
        id: 10,
        target_name: "Ali Hassan",
        candidate_name: "Hassan Ali",
        expected_match: false,
    },
    NameTestCase {
        id: 11,
        target_name: "Sophie Martin",
        candidate_name: "Claire Martin",
        expected_match: false,
    },
    NameTestCase {
        id: 12,
        target_name: "William Carter",
        candidate_name: "Liam Carter",
        expected_match: false,
    },
];
