use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    confcheck completions bash > ~/.bash_completion.d/confcheck\n\n\
                  Generate zsh completions:\n    confcheck completions zsh > ~/.zfunc/_confcheck")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
