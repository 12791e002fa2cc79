use clap::{Parser, Subcommand};
use eyre::Context;
use log::info;
use model::decimal::Decimal;
use montonio::PaymentInfo;

#[derive(Parser)]
#[command(author, version, about = "Montonio payment link helper", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Issue a payment token and print the redirect URL
    PaymentUrl {
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        reference: String,
        #[arg(long)]
        return_url: String,
        #[arg(long)]
        notification_url: Option<String>,
        #[arg(long)]
        merchant_name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        structured_description: Option<String>,
        /// Preselected bank (ASPSP) identifier
        #[arg(long)]
        bank: Option<String>,
        #[arg(long)]
        locale: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
    /// Print the bank list endpoint and its auth token
    BankList,
    /// Print the merchant reference of a finalized payment token
    Reference { token: String },
}

fn main() -> eyre::Result<()> {
    pretty_env_logger::init();
    color_eyre::install()?;

    let cli = Cli::parse();
    let env = env::Env::load().context("Failed to load configuration")?;
    info!("Using {} environment", env.environment());

    match cli.command {
        Command::PaymentUrl {
            amount,
            reference,
            return_url,
            notification_url,
            merchant_name,
            description,
            structured_description,
            bank,
            locale,
            email,
            phone,
            first_name,
            last_name,
        } => {
            let mut info = PaymentInfo::new(amount, reference, return_url);
            info.merchant_notification_url = notification_url;
            info.merchant_name = merchant_name;
            info.payment_information_unstructured = description;
            info.preselected_aspsp = bank;
            info.preselected_locale = locale;
            info.payment_information_structured = structured_description;
            info.checkout_email = email;
            info.checkout_phone_number = phone;
            info.checkout_first_name = first_name;
            info.checkout_last_name = last_name;

            let token = montonio::payment_token(&info, &env.credentials())
                .context("Failed to issue payment token")?;
            println!("{}", montonio::payment_url(&token, env.environment()));
        }
        Command::BankList => {
            let request = montonio::bank_list_request(&env.credentials(), env.environment())
                .context("Failed to issue auth token")?;
            println!("url: {}", request.url);
            println!("auth: Bearer {}", request.auth);
        }
        Command::Reference { token } => {
            match montonio::reference_from_payment_token(&token, env.secret_key())
                .context("Payment token verification failed")?
            {
                Some(reference) => println!("{}", reference),
                None => println!("Payment is not finalized"),
            }
        }
    }

    Ok(())
}
