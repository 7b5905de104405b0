//! Built-in question data.
//!
//! The routing question and the four style-specific fixed sets are static:
//! nine questions per style, each with four options mapped positionally to
//! the categories (A = Passion, B = Profession, C = Mission, D = Vocation).

use crate::quiz::types::{Category, QuizStyle};

/// A pre-authored question with its four positional options.
#[derive(Debug, Clone, Copy)]
pub struct StaticQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
}

/// Number of fixed-phase questions per style.
pub const FIXED_QUESTIONS: usize = 9;

/// Category informed by a fixed-phase option, by position.
pub fn category_for_option(index: usize) -> Option<Category> {
    Category::ALL.get(index).copied()
}

/// The routing question. Its four options select the quiz style for the
/// rest of the session, in [`QuizStyle::ALL`] order.
pub const ROUTING_QUESTION: StaticQuestion = StaticQuestion {
    question: "How would you like to explore what drives you today?",
    options: [
        "Make it a game - surprise me with playful scenarios",
        "Go deep - I want questions that make me reflect",
        "Tell it as a story - let my answers build a narrative",
        "Keep it quick - short questions, gut answers",
    ],
};

/// Style selected by a routing option, by position.
pub fn style_for_option(index: usize) -> Option<QuizStyle> {
    QuizStyle::ALL.get(index).copied()
}

/// The fixed question set for a style. Always [`FIXED_QUESTIONS`] entries.
pub fn fixed_set(style: QuizStyle) -> &'static [StaticQuestion; FIXED_QUESTIONS] {
    match style {
        QuizStyle::Playful => &PLAYFUL_SET,
        QuizStyle::Introspective => &INTROSPECTIVE_SET,
        QuizStyle::Narrative => &NARRATIVE_SET,
        QuizStyle::RapidFire => &RAPID_FIRE_SET,
    }
}

const PLAYFUL_SET: [StaticQuestion; FIXED_QUESTIONS] = [
    StaticQuestion {
        question: "A genie grants you one perfect Saturday, repeating forever. What does it look like?",
        options: [
            "Lost in making something - music, paint, words, code for fun",
            "Leveling up a skill until I can do it blindfolded",
            "Rallying people around something that matters to us",
            "Turning a clever idea into actual money by sunset",
        ],
    },
    StaticQuestion {
        question: "Pick a superpower for your working life:",
        options: [
            "Instant inspiration - ideas arrive whenever I call",
            "Instant mastery - any skill learned in a day",
            "Instant empathy - I always know how to help",
            "Instant opportunity - I spot the deal everyone missed",
        ],
    },
    StaticQuestion {
        question: "You're a character in a video game. What's your class?",
        options: [
            "The Bard - expression and imagination are my weapons",
            "The Artificer - I build intricate things that work",
            "The Cleric - the party stays standing because of me",
            "The Merchant - I always know what things are worth",
        ],
    },
    StaticQuestion {
        question: "Your friends secretly describe you as the one who...",
        options: [
            "Always has a weird creative project going",
            "Can actually fix the thing nobody else can",
            "Shows up when someone's having a rough week",
            "Knows how to turn plans into results",
        ],
    },
    StaticQuestion {
        question: "You win a free year off. Day one, you...",
        options: [
            "Set up a studio and finally make the thing",
            "Enroll in the hardest course I can find",
            "Volunteer somewhere I can make a dent",
            "Start the business I keep sketching on napkins",
        ],
    },
    StaticQuestion {
        question: "Choose your dream team role for a heist (a legal one):",
        options: [
            "The mastermind sketching the audacious plan",
            "The specialist who executes the impossible part",
            "The face who keeps the crew together and calm",
            "The fixer who finds buyers before we're done",
        ],
    },
    StaticQuestion {
        question: "A mysterious door appears with four labels. Which do you open?",
        options: [
            "'Things you've always wanted to create'",
            "'Skills you could be world-class at'",
            "'Problems the world needs solved'",
            "'Markets nobody has noticed yet'",
        ],
    },
    StaticQuestion {
        question: "What trophy would you most want on your shelf?",
        options: [
            "'Most original work of the year'",
            "'Technical excellence award'",
            "'Changed someone's life'",
            "'Built something people pay for'",
        ],
    },
    StaticQuestion {
        question: "Your phone buzzes with a notification you'd actually love. What is it?",
        options: [
            "Someone shared the thing I made and it's spreading",
            "I've been invited to teach what I'm best at",
            "A stranger says my help changed their path",
            "The first sale just landed",
        ],
    },
];

const INTROSPECTIVE_SET: [StaticQuestion; FIXED_QUESTIONS] = [
    StaticQuestion {
        question: "When you lose track of time, what are you usually doing?",
        options: [
            "Creating or expressing something personal",
            "Practicing or refining a skill I care about",
            "Listening to someone and helping them untangle things",
            "Planning, organizing, or improving how something runs",
        ],
    },
    StaticQuestion {
        question: "Which compliment lands deepest for you?",
        options: [
            "\"Your work moved me\"",
            "\"You're remarkably good at this\"",
            "\"You made a real difference for me\"",
            "\"You built something genuinely valuable\"",
        ],
    },
    StaticQuestion {
        question: "What do you quietly fear your life might lack?",
        options: [
            "Self-expression - never making what's inside me",
            "Mastery - never being truly excellent at anything",
            "Meaning - never mattering to anyone beyond myself",
            "Security - never building something that sustains me",
        ],
    },
    StaticQuestion {
        question: "When you imagine your best self ten years from now, what stands out?",
        options: [
            "A body of work that is unmistakably mine",
            "Deep expertise people seek out",
            "A community that is better because I showed up",
            "Independence earned by what I built",
        ],
    },
    StaticQuestion {
        question: "What kind of difficulty do you tolerate most willingly?",
        options: [
            "The uncertainty of creative work nobody asked for",
            "The grind of deliberate practice",
            "The weight of other people's problems",
            "The risk of betting on my own judgment",
        ],
    },
    StaticQuestion {
        question: "Looking back, which moments do you replay with satisfaction?",
        options: [
            "Finishing something expressive and true",
            "Pulling off something technically hard",
            "Seeing someone thrive because I helped",
            "Watching a plan pay off better than expected",
        ],
    },
    StaticQuestion {
        question: "What draws your attention when you read or browse late at night?",
        options: [
            "Art, design, writing - how people express things",
            "Explanations of how things really work",
            "Stories of people overcoming hard circumstances",
            "How people built careers and companies",
        ],
    },
    StaticQuestion {
        question: "Which loss would unsettle you most?",
        options: [
            "Losing the urge to make things",
            "Losing my edge in what I'm good at",
            "Losing the sense that my work helps anyone",
            "Losing control over my own livelihood",
        ],
    },
    StaticQuestion {
        question: "What does 'a good day's work' privately mean to you?",
        options: [
            "I made something that didn't exist this morning",
            "I did difficult work at a standard I respect",
            "Someone is better off because of my day",
            "I moved a goal measurably closer",
        ],
    },
];

const NARRATIVE_SET: [StaticQuestion; FIXED_QUESTIONS] = [
    StaticQuestion {
        question: "Every story has an opening scene. Yours begins with you absorbed in...",
        options: [
            "A half-finished creation spread across the desk",
            "A difficult problem everyone else gave up on",
            "A conversation with someone who needed one",
            "A plan with numbers that are starting to add up",
        ],
    },
    StaticQuestion {
        question: "The mentor in your story pulls you aside. What do they tell you?",
        options: [
            "\"Stop hiding your work. Show people.\"",
            "\"Go deeper. You've only scratched the surface.\"",
            "\"They need you more than you realize.\"",
            "\"Charge what it's worth.\"",
        ],
    },
    StaticQuestion {
        question: "Act two opens with an unexpected letter. Which one would change your story most?",
        options: [
            "An invitation to present your creative work publicly",
            "An offer to apprentice under a master of your craft",
            "A plea for help from a community you know",
            "A backer offering to fund your idea",
        ],
    },
    StaticQuestion {
        question: "Your story's low point arrives. What went missing?",
        options: [
            "The spark - nothing feels worth making",
            "The challenge - the work stopped stretching me",
            "The point - nobody seems helped by any of it",
            "The ground - the money stopped making sense",
        ],
    },
    StaticQuestion {
        question: "A stranger recognizes you in chapter seven. They know you as...",
        options: [
            "The one whose work they have pinned on their wall",
            "The one who solved their impossible problem",
            "The one who showed up when nobody else did",
            "The one whose venture everyone's talking about",
        ],
    },
    StaticQuestion {
        question: "The turning point: you're offered one door forward. Which tempts you?",
        options: [
            "A year of protected time to create freely",
            "A role working beside the best in your field",
            "Leadership of a cause you believe in",
            "Ownership of something you can grow",
        ],
    },
    StaticQuestion {
        question: "Your trusted companion in the story is someone who...",
        options: [
            "Pushes my imagination further than I dare alone",
            "Holds me to a standard I can't reach alone",
            "Reminds me who the work is for",
            "Keeps the venture alive and the lights on",
        ],
    },
    StaticQuestion {
        question: "In the final act, the narrator sums up what you were seeking all along:",
        options: [
            "To make things that carried something true",
            "To become undeniably good",
            "To leave people better than I found them",
            "To build something lasting and mine",
        ],
    },
    StaticQuestion {
        question: "The epilogue describes your legacy. What image does it close on?",
        options: [
            "Work of yours, still moving strangers years later",
            "Students of yours, carrying the craft forward",
            "A community still running what you started",
            "An enterprise still providing for people",
        ],
    },
];

const RAPID_FIRE_SET: [StaticQuestion; FIXED_QUESTIONS] = [
    StaticQuestion {
        question: "Free afternoon. First instinct?",
        options: [
            "Make something",
            "Learn something",
            "Help someone",
            "Build something profitable",
        ],
    },
    StaticQuestion {
        question: "Best praise?",
        options: [
            "\"That's beautiful\"",
            "\"That's brilliant\"",
            "\"That helped me\"",
            "\"That's valuable\"",
        ],
    },
    StaticQuestion {
        question: "Pick a desk object:",
        options: [
            "Sketchbook",
            "Reference manual",
            "Thank-you note",
            "Revenue chart",
        ],
    },
    StaticQuestion {
        question: "Worst work day?",
        options: [
            "No room for ideas",
            "No hard problems",
            "No one helped",
            "Nothing moved forward",
        ],
    },
    StaticQuestion {
        question: "Dream headline about you?",
        options: [
            "\"A singular creative voice\"",
            "\"The expert's expert\"",
            "\"The one who gave back\"",
            "\"Self-made and thriving\"",
        ],
    },
    StaticQuestion {
        question: "You'd work late for...",
        options: [
            "A piece that's almost right",
            "A bug that's almost cracked",
            "A person who's almost okay",
            "A deal that's almost closed",
        ],
    },
    StaticQuestion {
        question: "Browser tabs right now?",
        options: [
            "Inspiration and references",
            "Tutorials and documentation",
            "Causes and communities",
            "Markets and ideas",
        ],
    },
    StaticQuestion {
        question: "Gut pick - a year of free...",
        options: [
            "Studio space",
            "Masterclasses",
            "Volunteering time",
            "Seed funding",
        ],
    },
    StaticQuestion {
        question: "Your money should mostly buy...",
        options: [
            "Creative freedom",
            "Better tools and training",
            "Capacity to give",
            "More opportunities",
        ],
    },
];
