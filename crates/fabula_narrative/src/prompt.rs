//! The default story prompt.

/// The known-good prompt driving the labeled-section format the parser
/// expects. Retries after a parse failure always regenerate with this
/// prompt, even when the first attempt used an override.
pub const DEFAULT_PROMPT: &str = "\
Your goal is to write short tricky situations. These stories are split into 3 parts, where at the end of the first
two parts you present readers with two options on how to proceed. Only after a second response, you will finish the
story. Options should be no longer than 25 characters. No conclusions in the end.

Write a story in the format replacing keywords in brackets with actual values. Do not change formatting of output:
{story-begin}:


{option 1}:


{option 2}:


{story-option 1}:


{option 1}:


{option 2}:


{end-option 1}:


{end-option 2}:


{story-option 2}:


{option 1}:


{option 2}:


{end-option 1}:


{end-option 2}:
";
