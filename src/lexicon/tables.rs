//! Built-in English, Hindi (Devanagari) and romanized Hindi tables.
//!
//! Order within each table is significant: indicators are emitted in table
//! order and truncated, so reordering changes which evidence is reported.

pub const HIGH_RISK: &[&str] = &[
    "can't pay", "no money", "broke", "unemployed", "lost job",
    "bankruptcy", "lawyer", "dispute", "wrong", "not mine",
    "never received", "scam", "harassment", "sue", "court",
    "refuse", "won't pay", "can't afford", "financial hardship",
    "पैसे नहीं", "पैसा नहीं", "बेरोजगार", "नौकरी नहीं", "गलत", "मेरा नहीं",
    "नहीं मिला", "धोखा", "गलत नंबर", "वकील", "अदालत", "केस", "मना करता",
    "paisa nahi", "paise nahi", "berozgar", "naukri nahi", "galat hai",
    "mera nahi", "nahi mila", "dhoka", "galat number", "vakeel", "adalat",
    "case karunga", "mana karta", "afford nahi kar sakta", "bankruptcy",
    "paisa khatam", "financial problem", "court jaaunga", "lawyer se baat",
];

pub const MEDIUM_RISK: &[&str] = &[
    "difficult", "tight", "struggling", "need time", "extension",
    "payment plan", "partial", "later", "next month", "busy",
    "forgot", "remind me", "will try", "maybe", "not sure",
    "मुश्किल", "परेशानी", "समय चाहिए", "भूल गया", "बाद में", "अगले महीने",
    "व्यस्त", "कोशिश करूंगा", "शायद", "पता नहीं", "थोड़ा समय",
    "mushkil", "pareshani", "samay chahiye", "bhul gaya", "baad mein",
    "agle mahine", "vyast", "busy hun", "koshish karunga", "shayad",
    "pata nahi", "thoda samay", "time chahiye", "extension chahiye",
    "payment plan", "partial payment", "installment mein", "emi mein",
];

pub const LOW_RISK: &[&str] = &[
    "yes", "okay", "sure", "will pay", "today", "tomorrow",
    "understand", "sorry", "apologize", "thank you", "appreciate",
    "payment", "pay now", "confirm", "agreed", "right away",
    "हाँ", "ठीक", "समझ गया", "माफ़ करो", "धन्यवाद", "शुक्रिया", "सही",
    "आज", "कल", "अभी", "तुरंत", "पेमेंट", "भुगतान", "देता हूँ",
    "haan", "theek", "theek hai", "samjh gaya", "maaf karo", "dhanyawad",
    "shukriya", "thank you", "sahi", "aaj", "kal", "abhi", "turant",
    "payment kar dunga", "paisa de dunga", "bhugtan", "pay kar dunga",
    "samay pe dunga", "confirm", "agreed", "bilkul", "zaroor",
];

pub const COOPERATION: &[&str] = &[
    "thank you", "sorry", "understand", "appreciate", "yes",
    "okay", "sure", "will do", "agreed", "right",
    "haan", "theek", "theek hai", "samjh gaya", "maaf karo", "shukriya",
    "dhanyawad", "bilkul", "zaroor", "kar dunga", "de dunga", "samjha",
    "acha", "sahi", "ठीक", "हाँ", "समझ गया", "माफ़ करो", "धन्यवाद",
    "शुक्रिया", "बिल्कुल", "जरूर", "अच्छा", "सही",
];

pub const NON_COOPERATION: &[&str] = &[
    "no", "can't", "won't", "refuse", "busy", "later", "maybe",
    "not now", "call back", "don't have time", "not interested",
    "nahi", "nahin", "mana", "vyast", "busy", "baad mein", "phone rakh",
    "time nahi", "interested nahi", "pareshaan mat karo", "tang mat karo",
    "नहीं", "मना", "व्यस्त", "बाद में", "फोन रख", "समय नहीं", "परेशान मत करो",
    "तंग मत करो", "call back", "later call karo", "abhi nahi",
];

pub const POSITIVE: &[&str] = &[
    "thank", "sorry", "appreciate", "understand", "yes", "okay", "good", "fine",
    "great", "excellent", "wonderful", "happy", "pleased", "satisfied",
    "dhanyawad", "shukriya", "maaf karo", "samjh gaya", "theek", "acha", "badhiya",
    "khushi", "santushti", "prasanna", "haan", "bilkul", "zaroor", "accha",
    "sahi", "badiya", "mast", "sundar", "samjha", "theek hai",
    "धन्यवाद", "शुक्रिया", "माफ़ करो", "समझ गया", "ठीक", "अच्छा", "बढ़िया",
    "खुशी", "संतुष्टि", "प्रसन्न", "हाँ", "बिल्कुल", "जरूर", "सही",
];

pub const NEGATIVE: &[&str] = &[
    "no", "can't", "won't", "angry", "upset", "wrong", "bad", "hate", "refuse",
    "terrible", "awful", "horrible", "disgusted", "furious", "annoyed",
    "nahi", "nahin", "gussa", "pareshaan", "galat", "bura", "nafrat", "mana",
    "tang", "irritate", "problem", "mushkil", "takleef", "dukh", "ghussa",
    "pareshan", "khafa", "chid", "badtameez", "bakwas",
    "नहीं", "गुस्सा", "परेशान", "गलत", "बुरा", "नफरत", "मना", "तंग",
    "समस्या", "मुश्किल", "तकलीफ", "दुःख", "खफा", "चिढ़", "बदतमीज", "बकवास",
];

pub const EVASIVE: &[&str] = &[
    "abhi busy hun", "time nahi hai", "baad mein call karo",
    "pareshaan mat karo", "tang mat karo", "galat number hai",
    "mujhe pata nahi", "kuch nahi pata", "samjh nahi aaya",
];

pub const HOSTILE: &[&str] = &[
    "phone rakh", "bakwas mat karo", "jhooth bol rahe ho",
    "scam hai ye", "fraud company", "police complaint karunga",
];

pub const DISTRESS: &[&str] = &[
    "paisa nahi hai", "afford nahi kar sakta", "salary nahi aayi",
    "job chali gayi", "business band ho gaya", "emi bhi nahi de pa raha",
];

pub const HINDI_MARKERS: &[&str] = &["nahi", "hai", "kar", "se", "mein", "ko", "ka", "ki", "ke"];

pub const ENGLISH_MARKERS: &[&str] = &["the", "and", "is", "are", "can", "will", "have", "not"];

/// Devanagari keywords rendered in English for reports
pub const TRANSLATIONS: &[(&str, &str)] = &[
    ("पैसे नहीं", "no money"),
    ("पैसा नहीं", "no money"),
    ("बेरोजगार", "unemployed"),
    ("नौकरी नहीं", "no job"),
    ("गलत", "wrong"),
    ("मेरा नहीं", "not mine"),
    ("नहीं मिला", "never received"),
    ("धोखा", "fraud/scam"),
    ("वकील", "lawyer"),
    ("अदालत", "court"),
    ("केस", "case"),
    ("मुश्किल", "difficult"),
    ("परेशानी", "problem/trouble"),
    ("समय चाहिए", "need time"),
    ("भूल गया", "forgot"),
    ("बाद में", "later"),
    ("व्यस्त", "busy"),
    ("हाँ", "yes"),
    ("ठीक", "okay"),
    ("समझ गया", "understood"),
    ("माफ़ करो", "sorry"),
    ("धन्यवाद", "thank you"),
    ("शुक्रिया", "thank you"),
    ("नहीं", "no"),
    ("गुस्सा", "angry"),
    ("परेशान", "upset/troubled"),
];
