use async_trait::async_trait;
use fabula_core::{StoryTag, StoryTree};
use fabula_error::{FabulaErrorKind, FabulaResult, NarrativeErrorKind};
use fabula_narrative::{DEFAULT_PROMPT, StoryGenerator};
use std::sync::Mutex;

/// Mock text driver that replays a script of canned responses and records
/// every prompt it receives.
struct ScriptedDriver {
    responses: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedDriver {
    fn new(responses: &[&str]) -> Self {
        let mut responses: Vec<String> = responses.iter().map(|s| s.to_string()).collect();
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl fabula_interface::TextDriver for ScriptedDriver {
    async fn complete(&self, prompt: &str) -> FabulaResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut responses = self.responses.lock().unwrap();
        Ok(responses.pop().unwrap_or_else(|| "out of script".to_string()))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

fn assert_tag_set(tree: &StoryTree) {
    let mut tags: Vec<String> = tree.nodes().iter().map(|n| n.tag.to_string()).collect();
    tags.sort();
    let mut expected = vec![
        "story",
        "story-1",
        "story-1-1",
        "story-1-2",
        "story-2",
        "story-2-1",
        "story-2-2",
    ];
    expected.sort();
    assert_eq!(tags, expected);
}

const VALID_RESPONSE: &str = r"{story-begin}:
A stranger hands you a sealed envelope at the station. Do you:

{option 1}: Open it now

{option 2}: Hand it to the guard

{story-option 1}:
Inside is a key and an address across town. Do you:

{option 1}: Go to the address

{option 2}: Throw the key away

{end-option 1}:
The address is a storage unit full of old letters addressed to you.

{end-option 2}:
You toss the key in the river and never learn what it opened.

{story-option 2}:
The guard turns pale and asks where you got it. Do you:

{option 1}: Tell the truth

{option 2}: Walk away

{end-option 1}:
The guard escorts you to a back office and closes the door.

{end-option 2}:
You leave the station with the feeling of being watched.
";

#[tokio::test]
async fn valid_output_yields_a_complete_tree() {
    let generator = StoryGenerator::new(ScriptedDriver::new(&[VALID_RESPONSE]));

    let tree = generator.generate_tree(None).await.unwrap();

    assert_tag_set(&tree);
    assert_eq!(tree.active_tag(), StoryTag::Begin);
    let begin = tree.active();
    assert_eq!(begin.option_1.as_deref(), Some("Open it now"));
    assert_eq!(begin.option_2.as_deref(), Some("Hand it to the guard"));
    assert!(tree.get(StoryTag::Ending22).unwrap().end);
}

#[tokio::test]
async fn retries_fall_back_to_the_default_prompt() {
    let generator =
        StoryGenerator::new(ScriptedDriver::new(&["no structure here", VALID_RESPONSE]));

    let tree = generator
        .generate_tree(Some("write me a story about trains"))
        .await
        .unwrap();
    assert_tag_set(&tree);

    let prompts = generator.driver().prompts();
    assert_eq!(prompts.len(), 2);
    assert_eq!(prompts[0], "write me a story about trains");
    assert_eq!(prompts[1], DEFAULT_PROMPT);
}

#[tokio::test]
async fn the_budget_bounds_regeneration() {
    let generator = StoryGenerator::new(ScriptedDriver::new(&["bad", "bad", "bad", "bad", "bad"]));

    let err = generator.generate_tree(None).await.unwrap_err();
    match err.kind() {
        FabulaErrorKind::Narrative(e) => {
            assert!(matches!(e.kind, NarrativeErrorKind::Parse(_)));
        }
        other => panic!("expected a narrative error, got {other}"),
    }

    // One initial attempt plus three retries, all on the default prompt.
    let prompts = generator.driver().prompts();
    assert_eq!(prompts.len(), 4);
    assert!(prompts.iter().all(|p| p == DEFAULT_PROMPT));
}

#[tokio::test]
async fn wrapped_lines_are_collapsed_before_matching() {
    // A section body split across lines would otherwise stop the pattern at
    // the first line break.
    let padded = VALID_RESPONSE.replace("a sealed envelope", "a sealed\n envelope");
    let generator = StoryGenerator::new(ScriptedDriver::new(&[&padded]));

    let tree = generator.generate_tree(None).await.unwrap();
    assert!(tree.active().text.contains("sealedenvelope"));
}
