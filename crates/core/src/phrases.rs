//! Canned phrases and random selection.
//!
//! Phrases may contain SSML markup; the response builder wraps them in a
//! `<speak>` element. Selection takes the random source as an argument so
//! callers (and tests) decide how it is seeded.

use rand::{Rng, seq::IndexedRandom};

pub const WELCOMES: &[&str] = &[
    "What a <prosody volume='loud'>great</prosody> day for crypto! How can I help?",
    "<prosody volume='x-loud'>Hello</prosody>, <prosody volume='loud'>fellow</prosody> cryptopian! How can I assist?",
    "<prosody volume='x-loud'>Hi</prosody> there! Not a day without crypto, am I right? How can I help?",
    "Well <prosody volume='loud'>hello</prosody> <prosody volume='loud'>there</prosody>, my sweet little crypto nerd! How can I assist?",
    "<prosody volume='x-loud'>Greetings</prosody> from planet crypto! How can I help?",
    "<prosody volume='x-loud'>Bonjour</prosody>, my crypto friend! How can I assist?",
    "<prosody volume='x-loud'>Howdy</prosody>, my precious <prosody volume='loud'>crypto</prosody> geek! How can I help?",
    "<prosody volume='x-loud'>Greetings</prosody>, my <prosody volume='loud'>crypto</prosody> comrade! How can I assist?",
    "Look who it <prosody volume='loud'>is</prosody>, my crypto buddy! How can I help?",
    "<prosody volume='x-loud'>Cheers</prosody>, my <prosody volume='loud'>crypto</prosody> soul mate! How can I assist?",
    "<prosody volume='x-loud'>Hello</prosody>, crypto partner! Nice to hear you! How can I help?",
    "<prosody volume='x-loud'>Hey!</prosody> Your crypto cousin here! How can I assist?",
    "<prosody volume='x-loud'>Hola</prosody>, my dearest crypto amigo! How can I help?",
    "<prosody volume='x-loud'>Ciao</prosody>, my beloved <prosody volume='loud'>crypto</prosody> novice! How can I assist?",
    "<prosody volume='x-loud'>Aloha</prosody>, my cherished <prosody volume='loud'>crypto</prosody> addict! How can I help?",
    "<prosody volume='x-loud'>Welcome</prosody>, my dear <prosody volume='loud'>crypto</prosody> buddy! How can I assist?",
    "It's great to hear you, my sweet crypto geek! How can I help?",
    "So nice to hear you, my lovely <prosody volume='loud'>crypto</prosody> noob! How can I assist?",
];

/// Reprompts used after the welcome.
pub const REPROMPTS: &[&str] = &[
    "Excuse me, I was checking my portfolio. Can you say it again?",
    "<say-as interpret-as='interjection'>Damn</say-as>, my <prosody volume='loud'>wallet</prosody> looks so good! Can you repeat?",
    "Sorry, I didn't get that. I was stacking satoshis. Can you rephrase?",
    "Sorry, I got a text from Satoshi. Can you say that again?",
    "Sorry, I was checking my <prosody volume='loud'>crypto</prosody> wallet. Please say that again.",
    "I beg your pardon, I was checking the price of <prosody volume='loud'>Bit</prosody>coin. Come again?",
    "Forgive me, I was texting this guy, Nakamoto. Say that again, please!",
    "I'm sorry, I was buying some coins. Can you repeat?",
    "Excuse me, Satoshi keeps calling me. Please repeat!",
    "Oups, you caught me checking my <prosody volume='loud'>crypto</prosody> stack. Say that again, please!",
];

/// Spoken when the platform could not map the utterance to any intent.
pub const FALLBACKS: &[&str] = &[
    "Excuse me, I was checking my portfolio. Can you say it again?",
    "<say-as interpret-as='interjection'>Damn</say-as>, my <prosody volume='loud'>Bit</prosody>coin wallet looks so good! Can you repeat?",
    "Sorry, I didn't get that. I was stacking satoshis. Can you rephrase?",
    "Sorry, I got a text from Satoshi. Can you say that again?",
    "Sorry, I was checking my <prosody volume='loud'>Bit</prosody>coin wallet. Please say that again.",
    "I beg your pardon, I was checking the price of <prosody volume='loud'>Bit</prosody>coin. Come again?",
    "Forgive me, I was texting this guy, Nakamoto. Say that again, please!",
    "I'm sorry, I was buying some coins. Can you repeat?",
    "Excuse me, Satoshi keeps calling me. Please repeat!",
    "<prosody volume='loud'>Oups</prosody>, you caught me checking my <prosody volume='loud'>Bit</prosody>coin stack. Say that again, please!",
];

pub const APOLOGIES: &[&str] = &[
    "Sorry, I can't understand the command. Please try again!",
    "I'm not sure I understand your wish. Say it again! I'm all ears.",
    "I didn't catch that. Can you repeat, please?",
];

pub const GOODBYES: &[&str] = &[
    "<prosody volume='loud'>Bye</prosody>, my crypto friend! HODL tight!",
    "See you soon, and may your wallet always be green!",
    "<prosody volume='x-loud'>Ciao</prosody>! Don't forget to stack those satoshis.",
    "Goodbye! Satoshi says hi.",
    "Farewell, crypto buddy! To the moon!",
];

/// Appended to an answer to keep the conversation going.
pub const FOLLOW_UPS: &[&str] = &[
    "Anything else I can do for you?",
    "Do you want to know anything else?",
    "Can I help you with another conversion?",
    "Shall I check another price for you?",
];

pub const HELP: &str = "Well, my little crypto friend, you basically have two options. You can ask me, for instance, 'How much is 2.5 Bitcoin in U.S. dollars?', or, something like 'How many Bitcoin can I buy for 100 Euro?'. So, how can I help you?";

/// Spoken by the repeat intent when there is nothing to repeat yet.
pub const NOTHING_TO_REPEAT: &str = "I haven't told you anything worth repeating yet. Ask me, for instance, 'How much is 2.5 Bitcoin in U.S. dollars?'";

/// Picks one phrase uniformly at random. An empty table yields `""`.
pub fn pick<R: Rng + ?Sized>(table: &[&'static str], rng: &mut R) -> &'static str {
    table.choose(rng).copied().unwrap_or_default()
}
