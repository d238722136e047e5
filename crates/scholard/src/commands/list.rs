use super::*;

/// Field to order a listing by.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OrderArg {
  /// Title, alphabetically
  Title,
  /// Publication year
  Year,
  /// When the entry was added
  Created,
  /// Citation count
  Citations,
}

impl From<OrderArg> for OrderField {
  fn from(order: OrderArg) -> Self {
    match order {
      OrderArg::Title => OrderField::Title,
      OrderArg::Year => OrderField::Year,
      OrderArg::Created => OrderField::CreatedAt,
      OrderArg::Citations => OrderField::Citations,
    }
  }
}

/// Arguments for [`Commands::List`].
#[derive(Args, Clone)]
pub struct ListArgs {
  /// Id of the user whose publications are listed
  #[arg(long, short)]
  pub user: i64,

  /// Order by this field instead of newest first
  #[arg(long, value_enum)]
  pub order: Option<OrderArg>,

  /// Reverse the chosen order
  #[arg(long, requires = "order")]
  pub descending: bool,

  /// Show detailed publication information
  #[arg(long)]
  pub detailed: bool,
}

/// Function for the [`Commands::List`] in the CLI.
pub async fn list<I: UserInteraction>(
  scholar: &mut Scholar,
  interaction: &I,
  list_args: ListArgs,
) -> Result<()> {
  let ListArgs { user, order, descending, detailed } = list_args;

  let mut query = Query::by_user(user);
  if let Some(order) = order {
    query = query.order_by(order.into());
    if descending {
      query = query.descending();
    }
  }
  let publications = query.execute(&mut scholar.database).await?;

  if publications.is_empty() {
    interaction.reply(ResponseContent::Info(&format!("User {user} has no publications")))
  } else if detailed {
    for publication in &publications {
      interaction.reply(ResponseContent::Publication(publication))?;
    }
    Ok(())
  } else {
    interaction.reply(ResponseContent::Publications(&publications))
  }
}
