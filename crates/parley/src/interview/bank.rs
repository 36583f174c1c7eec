//! Question Bank — static catalogue of questions by tier and topic category.
//!
//! Selection is two-stage uniform random: pick a category for the tier, then
//! pick a question within that category, excluding texts already asked this
//! session. When exclusion would empty the pool, the unrestricted category
//! pool is used instead so selection always yields a question.
//!
//! Pure function of its inputs plus a random source; the random source is
//! injected for deterministic tests.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::EngineError;
use crate::models::question::Tier;

/// One topic category and its question texts.
struct CategoryTemplates {
    category: &'static str,
    questions: &'static [&'static str],
}

const EASY_TEMPLATES: &[CategoryTemplates] = &[
    CategoryTemplates {
        category: "JavaScript Basics",
        questions: &[
            "What is the difference between let, const, and var in JavaScript?",
            "Explain what closures are in JavaScript.",
            "What is the difference between == and === in JavaScript?",
            "How do you declare a function in JavaScript?",
            "What is an arrow function and how does it differ from regular functions?",
        ],
    },
    CategoryTemplates {
        category: "React Basics",
        questions: &[
            "What is JSX and why do we use it?",
            "Explain the difference between functional and class components.",
            "What is state in React and how do you update it?",
            "What are props in React?",
            "What is the useEffect hook used for?",
        ],
    },
    CategoryTemplates {
        category: "Node.js Basics",
        questions: &[
            "What is Node.js and why is it useful?",
            "What is npm and what is it used for?",
            "Explain the difference between require() and import in Node.js.",
            "What is Express.js?",
            "What is middleware in Express.js?",
        ],
    },
];

const MEDIUM_TEMPLATES: &[CategoryTemplates] = &[
    CategoryTemplates {
        category: "React Intermediate",
        questions: &[
            "Explain the React component lifecycle and useEffect dependencies.",
            "What is the Virtual DOM and how does React use it?",
            "How do you handle forms in React?",
            "What are React hooks and why are they useful?",
            "Explain the difference between controlled and uncontrolled components.",
        ],
    },
    CategoryTemplates {
        category: "Node.js Intermediate",
        questions: &[
            "How do you handle asynchronous operations in Node.js?",
            "What is the event loop in Node.js?",
            "How do you work with file system in Node.js?",
            "What are streams in Node.js?",
            "How do you handle errors in Node.js applications?",
        ],
    },
    CategoryTemplates {
        category: "Database/API",
        questions: &[
            "What is RESTful API design?",
            "How do you connect to a database in Node.js?",
            "What is authentication and authorization?",
            "How do you handle CORS in Node.js?",
            "What are the HTTP status codes and when to use them?",
        ],
    },
];

const HARD_TEMPLATES: &[CategoryTemplates] = &[
    CategoryTemplates {
        category: "Advanced React",
        questions: &[
            "Explain React context and when to use it.",
            "What are React portals and why are they useful?",
            "How do you optimize React application performance?",
            "What is React concurrent features?",
            "Explain React server components.",
        ],
    },
    CategoryTemplates {
        category: "Advanced Node.js",
        questions: &[
            "How do you implement clustering in Node.js?",
            "What is the difference between process.nextTick() and setImmediate()?",
            "How do you handle memory leaks in Node.js?",
            "What are worker threads in Node.js?",
            "How do you implement caching in Node.js applications?",
        ],
    },
    CategoryTemplates {
        category: "System Design",
        questions: &[
            "Design a URL shortener service.",
            "How would you design a chat application?",
            "Explain load balancing and scaling strategies.",
            "How do you design a real-time notification system?",
            "What are microservices and when to use them?",
        ],
    },
];

fn catalogue(tier: Tier) -> &'static [CategoryTemplates] {
    match tier {
        Tier::Easy => EASY_TEMPLATES,
        Tier::Medium => MEDIUM_TEMPLATES,
        Tier::Hard => HARD_TEMPLATES,
    }
}

/// A bank selection: the question text plus the category it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedQuestion {
    pub text: &'static str,
    pub category: &'static str,
}

/// Picks a question for `tier`, excluding texts in `already_asked`.
/// Uses the thread-local random source.
pub fn pick_question(
    tier: Tier,
    already_asked: &[String],
) -> Result<PickedQuestion, EngineError> {
    pick_question_with(&mut rand::thread_rng(), tier, already_asked)
}

/// Random-source-injected variant of [`pick_question`].
pub fn pick_question_with<R: Rng + ?Sized>(
    rng: &mut R,
    tier: Tier,
    already_asked: &[String],
) -> Result<PickedQuestion, EngineError> {
    let categories = catalogue(tier);
    let category = categories
        .choose(rng)
        .ok_or(EngineError::EmptyCatalogue(tier))?;

    let unused: Vec<&'static str> = category
        .questions
        .iter()
        .copied()
        .filter(|text| !already_asked.iter().any(|asked| asked == text))
        .collect();

    // Exclusion emptied the pool: fall back to the unrestricted category pool.
    let pool: &[&'static str] = if unused.is_empty() {
        category.questions
    } else {
        &unused
    };

    let text = *pool.choose(rng).ok_or(EngineError::EmptyCatalogue(tier))?;

    Ok(PickedQuestion {
        text,
        category: category.category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_tier_has_three_categories_of_five() {
        for tier in Tier::ALL {
            let categories = catalogue(tier);
            assert_eq!(categories.len(), 3, "tier {tier}");
            for category in categories {
                assert_eq!(category.questions.len(), 5, "{}", category.category);
            }
        }
    }

    #[test]
    fn test_pick_returns_question_from_requested_tier() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = pick_question_with(&mut rng, Tier::Hard, &[]).unwrap();
        let in_catalogue = catalogue(Tier::Hard)
            .iter()
            .any(|c| c.category == picked.category && c.questions.contains(&picked.text));
        assert!(in_catalogue);
    }

    #[test]
    fn test_already_asked_texts_are_excluded() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut asked: Vec<String> = Vec::new();

        // Drawing repeatedly never repeats until a category pool is exhausted;
        // 6 draws can never exhaust a 5-question pool twice over 3 categories.
        for _ in 0..6 {
            let picked = pick_question_with(&mut rng, Tier::Easy, &asked).unwrap();
            assert!(
                !asked.contains(&picked.text.to_string()),
                "repeat: {}",
                picked.text
            );
            asked.push(picked.text.to_string());
        }
    }

    #[test]
    fn test_exhausted_category_falls_back_to_unrestricted_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        // Mark every easy question as asked; selection must still succeed.
        let asked: Vec<String> = catalogue(Tier::Easy)
            .iter()
            .flat_map(|c| c.questions.iter().map(|q| q.to_string()))
            .collect();
        let picked = pick_question_with(&mut rng, Tier::Easy, &asked).unwrap();
        assert!(asked.contains(&picked.text.to_string()));
    }

    #[test]
    fn test_selection_is_deterministic_under_seeded_rng() {
        let a = pick_question_with(&mut StdRng::seed_from_u64(9), Tier::Medium, &[]).unwrap();
        let b = pick_question_with(&mut StdRng::seed_from_u64(9), Tier::Medium, &[]).unwrap();
        assert_eq!(a, b);
    }
}
